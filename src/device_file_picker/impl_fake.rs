use crate::device_file_picker::interface::DeviceFilePicker;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// Answers each prompt with the next scripted pick; `None` is a cancel.
pub struct DeviceFilePickerFake {
    picks: Mutex<VecDeque<Option<PathBuf>>>,
}

impl DeviceFilePickerFake {
    pub fn new(picks: Vec<Option<PathBuf>>) -> Self {
        Self {
            picks: Mutex::new(picks.into()),
        }
    }
}

impl DeviceFilePicker for DeviceFilePickerFake {
    fn pick_file(&self) -> Option<PathBuf> {
        self.picks
            .lock()
            .ok()
            .and_then(|mut picks| picks.pop_front())
            .flatten()
    }
}
