/// Memory order of the input batch the model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorLayout {
    /// `[1, 3, size, size]`
    Nchw,
    /// `[1, size, size, 3]`
    #[allow(dead_code)]
    Nhwc,
}

/// Per-channel standardization applied after pixels are scaled to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    #[allow(dead_code)]
    pub fn unit_range() -> Self {
        Self {
            mean: [0.0; 3],
            std: [1.0; 3],
        }
    }

    pub fn imagenet() -> Self {
        Self {
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
        }
    }
}

/// What the raw model output represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Logits,
    #[allow(dead_code)]
    Probabilities,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub input_size: u32,
    pub layout: TensorLayout,
    pub normalization: Normalization,
    pub output: OutputKind,
}

impl ModelConfig {
    pub fn input_shape(&self) -> [usize; 4] {
        let size = self.input_size as usize;
        match self.layout {
            TensorLayout::Nchw => [1, 3, size, size],
            TensorLayout::Nhwc => [1, size, size, 3],
        }
    }
}
