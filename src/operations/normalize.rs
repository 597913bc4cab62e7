use image::{DynamicImage, RgbImage};
use tracing::debug;

/// Converts any decoded pixel format to 8-bit RGB.
///
/// Alpha is dropped without compositing against a background, the same as
/// reading only the color channels. Grayscale is replicated into all three channels
/// and higher precision formats are scaled down to 8 bits.
pub fn to_rgb8(pixels: DynamicImage) -> RgbImage {
    let color = pixels.color();
    if color.has_alpha() {
        debug!(?color, "discarding alpha channel");
    }
    match pixels {
        DynamicImage::ImageRgb8(buffer) => buffer,
        other => other.into_rgb8(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, LumaA, Rgb, Rgba};

    #[test]
    fn alpha_is_discarded_not_composited() {
        let transparent = image::RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 0]));
        let rgb = to_rgb8(DynamicImage::ImageRgba8(transparent));
        assert!(rgb.pixels().all(|p| *p == Rgb([200, 100, 50])));
    }

    #[test]
    fn grayscale_is_replicated() {
        let gray = image::GrayImage::from_pixel(1, 1, Luma([77]));
        assert_eq!(to_rgb8(DynamicImage::ImageLuma8(gray))[(0, 0)], Rgb([77, 77, 77]));

        let gray_alpha = image::GrayAlphaImage::from_pixel(1, 1, LumaA([9, 128]));
        assert_eq!(
            to_rgb8(DynamicImage::ImageLumaA8(gray_alpha))[(0, 0)],
            Rgb([9, 9, 9])
        );
    }

    #[test]
    fn sixteen_bit_is_scaled_down() {
        let deep = image::ImageBuffer::<Rgb<u16>, _>::from_pixel(1, 1, Rgb([65535, 0, 257]));
        assert_eq!(to_rgb8(DynamicImage::ImageRgb16(deep))[(0, 0)], Rgb([255, 0, 1]));
    }
}
