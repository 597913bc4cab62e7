use std::path::PathBuf;

use image::{DynamicImage, ExtendedColorType, ImageFormat};

/// A decoded input image, before any processing
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub format: Option<ImageFormat>,
    pub pixels: DynamicImage,
    pub properties: InputProperties,
}

/// What the file looked like on disk, which decoding does not preserve.
#[derive(Debug, Clone)]
pub struct InputProperties {
    pub filename: PathBuf,
    /// Palette images report as `Unknown` or their expanded type, depending on the codec
    pub color_type: ExtendedColorType,
    /// The file stores palette indices rather than colors
    pub palette: bool,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
