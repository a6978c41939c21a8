use crate::device_error_dialog::interface::DeviceErrorDialog;
use std::sync::Mutex;

#[derive(Default)]
pub struct DeviceErrorDialogFake {
    shown: Mutex<Vec<(String, String)>>,
}

impl DeviceErrorDialogFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl DeviceErrorDialog for DeviceErrorDialogFake {
    fn show_error(&self, title: &str, message: &str) {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push((title.to_string(), message.to_string()));
        }
    }
}
