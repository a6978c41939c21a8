use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Percentage in `[0, 100]`.
    pub confidence: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("cannot read image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("model invocation failed: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),
    #[error("model returned no class scores")]
    EmptyOutput,
    #[error("model returned a non-finite score for class {index}")]
    NonFiniteScore { index: usize },
    #[error("class index {index} is outside the label table of {len} labels")]
    LabelOutOfRange { index: usize, len: usize },
}

pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &DynamicImage) -> Result<Classification, ClassifyError>;
}

fn decode(path: &Path) -> Result<DynamicImage, ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Format comes from the file contents, falling back to the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage, ClassifyError> {
    Ok(decode(path)?)
}
