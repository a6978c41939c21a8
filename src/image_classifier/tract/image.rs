use crate::image_classifier::models::model_config::{ModelConfig, Normalization, TensorLayout};
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

/// Converts to RGB and stretches to the model's square input size.
pub fn resize_image(image: &DynamicImage, size: u32) -> RgbImage {
    imageops::resize(&image.to_rgb8(), size, size, imageops::FilterType::Triangle)
}

fn normalize(value: u8, channel: usize, normalization: &Normalization) -> f32 {
    (value as f32 / 255.0 - normalization.mean[channel]) / normalization.std[channel]
}

fn rgb_to_tensor(rgb: &RgbImage, config: &ModelConfig) -> Tensor {
    let size = config.input_size as usize;
    let normalization = &config.normalization;

    match config.layout {
        TensorLayout::Nchw => {
            tract_ndarray::Array4::from_shape_fn((1, 3, size, size), |(_, c, y, x)| {
                normalize(rgb.get_pixel(x as u32, y as u32)[c], c, normalization)
            })
            .into_tensor()
        }
        TensorLayout::Nhwc => {
            tract_ndarray::Array4::from_shape_fn((1, size, size, 3), |(_, y, x, c)| {
                normalize(rgb.get_pixel(x as u32, y as u32)[c], c, normalization)
            })
            .into_tensor()
        }
    }
}

/// Batch of one, ready for a single forward pass.
pub fn image_to_tensor(image: &DynamicImage, config: &ModelConfig) -> Tensor {
    let resized = resize_image(image, config.input_size);
    rgb_to_tensor(&resized, config)
}
