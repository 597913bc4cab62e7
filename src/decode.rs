use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageFormat, ImageReader};

use crate::convert_err;
use crate::error::ConvertError;
use crate::image::{InputProperties, SourceImage};

/// Guesses the format based on file contents, falling back to the file extension.
///
/// Failing to read the file is a fault; anything that goes wrong once the bytes
/// are in hand is a decode error.
pub fn decode(file: &Path) -> Result<SourceImage, ConvertError> {
    let data = std::fs::read(file)
        .map_err(|error| convert_err!(Fault, "unable to open image '{}': {error}", file.display()))?;

    let mut reader = ImageReader::new(Cursor::new(data.as_slice()));
    if let Ok(format) = ImageFormat::from_path(file) {
        reader.set_format(format);
    }
    let reader = reader.with_guessed_format()?;
    let format = reader.format();
    let decoder = reader.into_decoder()?;
    let color_type = decoder.original_color_type();
    let pixels = DynamicImage::from_decoder(decoder)?;

    Ok(SourceImage {
        format,
        pixels,
        properties: InputProperties {
            filename: file.to_owned(),
            color_type,
            palette: is_palette(format, color_type, &data),
        },
    })
}

/// Decoders hand out palette images already expanded to RGB(A),
/// so this looks at what the file itself declares.
#[cfg_attr(not(feature = "png"), allow(unused_variables))]
fn is_palette(format: Option<ImageFormat>, color_type: ExtendedColorType, data: &[u8]) -> bool {
    match format {
        Some(ImageFormat::Gif) => true,
        #[cfg(feature = "png")]
        Some(ImageFormat::Png) => png::Decoder::new(Cursor::new(data))
            .read_info()
            .is_ok_and(|reader| reader.info().color_type == png::ColorType::Indexed),
        _ => matches!(color_type, ExtendedColorType::Unknown(_)),
    }
}
