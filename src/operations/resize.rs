use image::{DynamicImage, RgbImage, RgbaImage};
use pic_scale_safe::{ImageSize, ResamplingFunction};
use tracing::debug;

use crate::arg_parsers::TargetSize;
use crate::convert_err;
use crate::error::ConvertError;

/// Resamples to exactly the requested size, ignoring the aspect ratio.
///
/// Palette images use nearest-neighbor so that only colors from the palette appear.
/// Everything else is bilinear; images with any transparency are filtered with
/// premultiplied alpha, so fully transparent pixels contribute no color.
/// The result keeps its alpha channel when it had one; see [super::to_rgb8] for dropping it.
pub fn resample(
    pixels: DynamicImage,
    from_palette: bool,
    size: TargetSize,
) -> Result<DynamicImage, ConvertError> {
    if pixels.width() == size.width.get() && pixels.height() == size.height.get() {
        debug!("image already has the target size, not resampling");
        return Ok(pixels);
    }
    debug!(
        from = %format_args!("{}x{}", pixels.width(), pixels.height()),
        to = %size,
        from_palette,
        "resampling"
    );

    if from_palette {
        let rgb = super::to_rgb8(pixels);
        return resize_rgb(&rgb, size, ResamplingFunction::Nearest).map(DynamicImage::ImageRgb8);
    }
    if pixels.color().has_alpha() {
        let rgba = pixels.into_rgba8();
        if !is_opaque(&rgba) {
            return resize_rgba_premultiplied(rgba, size).map(DynamicImage::ImageRgba8);
        }
        let rgb = DynamicImage::ImageRgba8(rgba).into_rgb8();
        return resize_rgb(&rgb, size, ResamplingFunction::Bilinear).map(DynamicImage::ImageRgb8);
    }
    let rgb = super::to_rgb8(pixels);
    resize_rgb(&rgb, size, ResamplingFunction::Bilinear).map(DynamicImage::ImageRgb8)
}

fn is_opaque(image: &RgbaImage) -> bool {
    image.pixels().all(|p| p.0[3] == u8::MAX)
}

fn resize_rgb(
    image: &RgbImage,
    size: TargetSize,
    function: ResamplingFunction,
) -> Result<RgbImage, ConvertError> {
    let resized = pic_scale_safe::resize_rgb8(
        image.as_raw(),
        image_size(image.width(), image.height()),
        image_size(size.width.get(), size.height.get()),
        function,
    )
    .map_err(|err| convert_err!(Decode, "failed to resample image to {size}: {err}"))?;

    RgbImage::from_raw(size.width.get(), size.height.get(), resized)
        .ok_or_else(|| wrong_buffer_size(size))
}

fn resize_rgba_premultiplied(
    mut image: RgbaImage,
    size: TargetSize,
) -> Result<RgbaImage, ConvertError> {
    pic_scale_safe::premultiply_rgba8(&mut image);
    let resized = pic_scale_safe::resize_rgba8(
        image.as_raw(),
        image_size(image.width(), image.height()),
        image_size(size.width.get(), size.height.get()),
        ResamplingFunction::Bilinear,
    )
    .map_err(|err| convert_err!(Decode, "failed to resample image to {size}: {err}"))?;

    let mut resized = RgbaImage::from_raw(size.width.get(), size.height.get(), resized)
        .ok_or_else(|| wrong_buffer_size(size))?;
    // pixels left with zero alpha have no recoverable color and become black
    pic_scale_safe::unpremultiply_rgba8(&mut resized);
    Ok(resized)
}

fn image_size(width: u32, height: u32) -> ImageSize {
    ImageSize::new(width as usize, height as usize)
}

fn wrong_buffer_size(size: TargetSize) -> ConvertError {
    convert_err!(
        Decode,
        "resampler produced a buffer that does not hold {size} pixels"
    )
}
