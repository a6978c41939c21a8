use app_context::AppContext;
use config::Config;
use device_error_dialog::impl_rfd::DeviceErrorDialogRfd;
use device_file_picker::impl_rfd::DeviceFilePickerRfd;
use library::logger::impl_console::LoggerConsole;
use shell::main::Shell;
use std::sync::Arc;

mod animal;
mod app_context;
mod config;
mod device_error_dialog;
mod device_file_picker;
mod download;
mod image_classifier;
mod labels;
mod library;
mod shell;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let context = AppContext::load(config, logger)?;

    let shell = Shell::new(
        context,
        Arc::new(DeviceFilePickerRfd::new()),
        Arc::new(DeviceErrorDialogRfd::new()),
    );

    shell::render::run(shell).map_err(|e| e.to_string())?;

    Ok(())
}
