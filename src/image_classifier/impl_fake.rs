use crate::image_classifier::interface::{Classification, ClassifyError, ImageClassifier};
use image::DynamicImage;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct ImageClassifierFake {
    result: Result<Classification, String>,
    calls: AtomicUsize,
}

impl ImageClassifierFake {
    pub fn new(label: &str, confidence: f32) -> Self {
        Self {
            result: Ok(Classification {
                label: label.to_string(),
                confidence,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, _image: &DynamicImage) -> Result<Classification, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(classification) => Ok(classification.clone()),
            Err(message) => Err(ClassifyError::Model(message.clone().into())),
        }
    }
}
