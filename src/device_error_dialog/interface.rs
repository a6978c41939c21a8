pub trait DeviceErrorDialog: Send + Sync {
    /// Blocks until the user dismisses the dialog.
    fn show_error(&self, title: &str, message: &str);
}
