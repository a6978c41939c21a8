use crate::image_classifier::models::model_config::{
    ModelConfig, Normalization, OutputKind, TensorLayout,
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RemoteFile {
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_size: (f32, f32),
    pub preview_max_size: (u32, u32),
    pub model: ModelConfig,
    pub model_file: RemoteFile,
    pub labels_file: RemoteFile,
    pub cache_dir: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Animal Classifier".to_string(),
            window_size: (500.0, 800.0),
            preview_max_size: (300, 300),
            model: mobilenet_v2(),
            model_file: RemoteFile {
                url: "https://github.com/onnx/models/raw/main/validated/vision/classification/mobilenet/model/mobilenetv2-7.onnx".to_string(),
                file_name: "mobilenetv2-7.onnx".to_string(),
            },
            labels_file: RemoteFile {
                url: "https://storage.googleapis.com/download.tensorflow.org/data/ImageNetLabels.txt"
                    .to_string(),
                file_name: "ImageNetLabels.txt".to_string(),
            },
            cache_dir: dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("animal-classifier"),
            logger_timezone: local_offset(),
        }
    }
}

fn mobilenet_v2() -> ModelConfig {
    ModelConfig {
        input_size: 224,
        layout: TensorLayout::Nchw,
        normalization: Normalization::imagenet(),
        output: OutputKind::Logits,
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
