use crate::animal::identify;
use crate::app_context::AppContext;
use crate::config::Config;
use crate::device_error_dialog::interface::DeviceErrorDialog;
use crate::device_file_picker::interface::DeviceFilePicker;
use crate::image_classifier::interface::{load_image, ClassifyError};
use crate::library::logger::interface::Logger;
use crate::shell::preview::{fit_within, Preview};
use std::path::Path;
use std::sync::Arc;

const ERROR_TITLE: &str = "Error";

/// What the window shows. Only `upload` changes it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct State {
    pub preview: Option<Preview>,
    pub result_text: String,
    pub log: Vec<String>,
}

struct Upload {
    preview: image::RgbaImage,
    message: String,
}

pub struct Shell {
    context: AppContext,
    file_picker: Arc<dyn DeviceFilePicker + Send + Sync>,
    error_dialog: Arc<dyn DeviceErrorDialog + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
    state: State,
    revision: u64,
}

impl Shell {
    pub fn new(
        context: AppContext,
        file_picker: Arc<dyn DeviceFilePicker + Send + Sync>,
        error_dialog: Arc<dyn DeviceErrorDialog + Send + Sync>,
    ) -> Self {
        let logger = context.logger.with_namespace("shell");
        Self {
            context,
            file_picker,
            error_dialog,
            logger,
            state: State::default(),
            revision: 0,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.context.config
    }

    /// Bound to the upload button. Runs to completion on the calling thread.
    pub fn upload(&mut self) {
        let Some(path) = self.file_picker.pick_file() else {
            let _ = self.logger.info("Upload cancelled");
            return;
        };

        let _ = self.logger.info(&format!("Classifying {}", path.display()));

        match self.classify_file(&path) {
            Ok(upload) => {
                self.revision += 1;
                self.state.preview = Some(Preview {
                    image: upload.preview,
                    revision: self.revision,
                });
                self.state
                    .log
                    .push(format!("{}: {}", file_name(&path), upload.message));
                self.state.result_text = upload.message;
                let _ = self.logger.info(&self.state.result_text);
            }
            Err(e) => {
                let _ = self.logger.error(&format!("{}: {}", path.display(), e));
                self.error_dialog
                    .show_error(ERROR_TITLE, &format!("An error occurred: {}", e));
            }
        }
    }

    fn classify_file(&self, path: &Path) -> Result<Upload, ClassifyError> {
        let image = load_image(path)?;

        let (max_width, max_height) = self.context.config.preview_max_size;
        let preview = fit_within(&image, max_width, max_height);

        let classification = self.context.image_classifier.classify(&image)?;

        Ok(Upload {
            preview,
            message: identify(&classification.label, classification.confidence),
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
