use std::path::PathBuf;

pub trait DeviceFilePicker: Send + Sync {
    /// `None` when the user cancels.
    fn pick_file(&self) -> Option<PathBuf>;
}
