use crate::image_classifier::models::model_config::ModelConfig;
use tract_onnx::prelude::Tensor;

/// A pre-trained network taken as an opaque callable: one input batch in,
/// one score per class out.
pub trait Model: Send + Sync {
    fn config(&self) -> &ModelConfig;

    fn num_classes(&self) -> usize;

    fn run(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
