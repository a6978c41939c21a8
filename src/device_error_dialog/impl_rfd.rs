use crate::device_error_dialog::interface::DeviceErrorDialog;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

pub struct DeviceErrorDialogRfd {}

impl DeviceErrorDialogRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl DeviceErrorDialog for DeviceErrorDialogRfd {
    fn show_error(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
