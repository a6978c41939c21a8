use crate::image_classifier::model::interface::Model;
use crate::image_classifier::models::model_config::ModelConfig;
use std::path::Path;
use tract_onnx::prelude::*;

pub struct ModelTractOnnx {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    num_classes: usize,
}

impl ModelTractOnnx {
    pub fn new(
        model_path: &Path,
        config: ModelConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, f32::fact(config.input_shape()).into())?
            .into_optimized()?;

        let num_classes = model
            .output_fact(0)?
            .shape
            .as_concrete()
            .and_then(|shape| shape.last().copied())
            .ok_or("model output shape is not concrete")?;

        let plan = model.into_runnable()?;

        Ok(Self {
            plan,
            config,
            num_classes,
        })
    }
}

impl Model for ModelTractOnnx {
    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn run(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let outputs = self.plan.run(tvec!(input.into_tvalue()))?;
        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;

        Ok(output.iter().copied().collect())
    }
}
