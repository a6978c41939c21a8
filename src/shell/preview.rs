use image::{DynamicImage, RgbaImage};

#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub image: RgbaImage,
    /// Bumped on every successful upload so the window knows to re-upload
    /// the texture.
    pub revision: u64,
}

/// Shrinks `image` to fit inside `max_width` x `max_height`, keeping its
/// aspect ratio. Smaller images are left at their own size.
pub fn fit_within(image: &DynamicImage, max_width: u32, max_height: u32) -> RgbaImage {
    if image.width() <= max_width && image.height() <= max_height {
        return image.to_rgba8();
    }
    image.thumbnail(max_width, max_height).to_rgba8()
}
