use crate::image_classifier::interface::{Classification, ClassifyError, ImageClassifier};
use crate::image_classifier::model::interface::Model;
use crate::image_classifier::softmax::{argmax, confidence_percent};
use crate::image_classifier::tract::image::image_to_tensor;
use crate::labels::LabelTable;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;

/// Runs a [`Model`] once per image and names the top class from the label
/// table.
pub struct ImageClassifierModel {
    model: Arc<dyn Model>,
    labels: LabelTable,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierModel {
    pub fn new(
        model: Arc<dyn Model>,
        labels: LabelTable,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            labels,
            logger: logger.with_namespace("image_classifier"),
        }
    }
}

impl ImageClassifier for ImageClassifierModel {
    fn classify(&self, image: &DynamicImage) -> Result<Classification, ClassifyError> {
        let config = self.model.config();

        let input = image_to_tensor(image, config);

        let scores = self.model.run(input).map_err(ClassifyError::Model)?;

        let index = argmax(&scores).ok_or(ClassifyError::EmptyOutput)?;

        let label = self
            .labels
            .get(index)
            .ok_or(ClassifyError::LabelOutOfRange {
                index,
                len: self.labels.len(),
            })?
            .to_string();

        let confidence = confidence_percent(&scores, index, config.output)
            .ok_or(ClassifyError::NonFiniteScore { index })?;

        let _ = self.logger.info(&format!(
            "class {} ({}) at {:.2}%",
            index, label, confidence
        ));

        Ok(Classification { label, confidence })
    }
}
