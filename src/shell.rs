pub mod main;
pub mod preview;
pub mod render;
