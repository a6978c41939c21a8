use crate::image_classifier::model::interface::Model;
use crate::image_classifier::models::model_config::ModelConfig;
use std::sync::Mutex;
use tract_onnx::prelude::Tensor;

/// Always scores `index` highest. Records the shape of every input it sees.
pub struct ModelFake {
    config: ModelConfig,
    scores: Result<Vec<f32>, String>,
    input_shapes: Mutex<Vec<Vec<usize>>>,
}

impl ModelFake {
    pub fn returning_index(config: ModelConfig, num_classes: usize, index: usize) -> Self {
        let mut scores = vec![0.0; num_classes];
        if let Some(score) = scores.get_mut(index) {
            *score = 4.0;
        }
        Self::returning_scores(config, scores)
    }

    pub fn returning_scores(config: ModelConfig, scores: Vec<f32>) -> Self {
        Self {
            config,
            scores: Ok(scores),
            input_shapes: Mutex::new(vec![]),
        }
    }

    pub fn failing(config: ModelConfig, message: &str) -> Self {
        Self {
            config,
            scores: Err(message.to_string()),
            input_shapes: Mutex::new(vec![]),
        }
    }

    pub fn input_shapes(&self) -> Vec<Vec<usize>> {
        self.input_shapes
            .lock()
            .map(|shapes| shapes.clone())
            .unwrap_or_default()
    }
}

impl Model for ModelFake {
    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn num_classes(&self) -> usize {
        self.scores.as_ref().map(Vec::len).unwrap_or(0)
    }

    fn run(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        if let Ok(mut shapes) = self.input_shapes.lock() {
            shapes.push(input.shape().to_vec());
        }

        match &self.scores {
            Ok(scores) => Ok(scores.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}
