use crate::device_file_picker::interface::DeviceFilePicker;
use rfd::FileDialog;
use std::path::PathBuf;

pub struct DeviceFilePickerRfd {}

impl DeviceFilePickerRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl DeviceFilePicker for DeviceFilePickerRfd {
    fn pick_file(&self) -> Option<PathBuf> {
        FileDialog::new().pick_file()
    }
}
