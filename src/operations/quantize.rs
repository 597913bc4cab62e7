use image::RgbImage;

/// Largest value of the 5-bit red and blue fields
const MAX_5BIT: u16 = 0b1_1111;
/// Largest value of the 6-bit green field
const MAX_6BIT: u16 = 0b11_1111;

/// Scales an 8-bit channel down to `0..=max`. Truncates, never rounds.
#[inline]
pub const fn quantize_channel(value: u8, max: u16) -> u16 {
    value as u16 * max / 255
}

/// Packs an 8-bit-per-channel color into RGB565: red in bits 15..11,
/// green in bits 10..5, blue in bits 4..0.
#[inline]
pub const fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = quantize_channel(r, MAX_5BIT);
    let g6 = quantize_channel(g, MAX_6BIT);
    let b5 = quantize_channel(b, MAX_5BIT);
    (r5 << 11) | (g6 << 5) | b5
}

/// Packed pixels of a whole frame, in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
}

impl PixelBuffer {
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Size of the serialized frame, two bytes per pixel
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 2
    }

    /// Serializes every pixel most significant byte first,
    /// which is the order the display controller shifts them in.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_be_bytes());
        }
        bytes
    }
}

pub fn quantize(image: &RgbImage) -> PixelBuffer {
    // `pixels()` walks rows top to bottom, left to right within a row
    let pixels = image
        .pixels()
        .map(|&image::Rgb([r, g, b])| pack_rgb565(r, g, b))
        .collect();
    PixelBuffer {
        width: image.width(),
        height: image.height(),
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use quickcheck_macros::quickcheck;
    use std::num::NonZeroU8;

    #[test]
    fn primaries_and_extremes() {
        assert_eq!(pack_rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(pack_rgb565(0, 0, 0), 0x0000);
        assert_eq!(pack_rgb565(255, 0, 0), 0xF800);
        assert_eq!(pack_rgb565(0, 255, 0), 0x07E0);
        assert_eq!(pack_rgb565(0, 0, 255), 0x001F);
    }

    #[test]
    fn quantization_truncates() {
        // 4 * 31 / 255 = 0.49, rounding would give 0 too, but 8 * 31 / 255 = 0.97 would round up
        assert_eq!(quantize_channel(4, MAX_5BIT), 0);
        assert_eq!(quantize_channel(8, MAX_5BIT), 0);
        assert_eq!(quantize_channel(9, MAX_5BIT), 1);
        assert_eq!(quantize_channel(254, MAX_5BIT), 30);

        assert_eq!(quantize_channel(4, MAX_6BIT), 0);
        assert_eq!(quantize_channel(5, MAX_6BIT), 1);
        assert_eq!(quantize_channel(251, MAX_6BIT), 62);
        assert_eq!(quantize_channel(252, MAX_6BIT), 62);
        assert_eq!(quantize_channel(255, MAX_6BIT), 63);
    }

    #[test]
    fn mid_gray() {
        // 128 * 31 / 255 = 15, 128 * 63 / 255 = 31
        assert_eq!(pack_rgb565(128, 128, 128), (15 << 11) | (31 << 5) | 15);
    }

    #[quickcheck]
    fn truncated_value_brackets_the_exact_one(value: u8) {
        for max in [MAX_5BIT, MAX_6BIT] {
            let quantized = quantize_channel(value, max) as u32;
            let exact_times_255 = value as u32 * max as u32;
            assert!(quantized * 255 <= exact_times_255);
            assert!(exact_times_255 < (quantized + 1) * 255);
        }
    }

    #[quickcheck]
    fn fields_do_not_overlap(r: u8, g: u8, b: u8) {
        let packed = pack_rgb565(r, g, b);
        assert_eq!(packed >> 11, quantize_channel(r, MAX_5BIT));
        assert_eq!((packed >> 5) & MAX_6BIT, quantize_channel(g, MAX_6BIT));
        assert_eq!(packed & MAX_5BIT, quantize_channel(b, MAX_5BIT));
    }

    #[quickcheck]
    // u8::MAX * u8::MAX pixels is plenty to exercise the indexing
    fn layout_is_row_major_big_endian(width: NonZeroU8, height: NonZeroU8) {
        let (width, height) = (width.get() as u32, height.get() as u32);
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, (x ^ y) as u8])
        });
        let buffer = quantize(&image);
        let bytes = buffer.to_be_bytes();

        assert_eq!(buffer.pixels().len(), (width * height) as usize);
        assert_eq!(bytes.len(), 2 * (width * height) as usize);
        for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
            let Rgb([r, g, b]) = image[(x, y)];
            let expected = pack_rgb565(r, g, b);
            let offset = 2 * (y * width + x) as usize;
            assert_eq!(buffer.get(x, y), Some(expected));
            assert_eq!([bytes[offset], bytes[offset + 1]], expected.to_be_bytes());
        }
    }

    #[test]
    fn second_row_starts_after_first() {
        let width = 320;
        let image = RgbImage::from_fn(width, 2, |x, y| match (x, y) {
            (0, 0) => Rgb([255, 0, 0]),
            (0, 1) => Rgb([0, 0, 255]),
            _ => Rgb([0, 0, 0]),
        });
        let bytes = quantize(&image).to_be_bytes();
        assert_eq!(&bytes[0..2], &[0xF8, 0x00]);
        let row = 2 * width as usize;
        assert_eq!(&bytes[row..row + 2], &[0x00, 0x1F]);
    }

    #[test]
    fn out_of_bounds_lookup() {
        let buffer = quantize(&RgbImage::new(2, 2));
        assert_eq!(buffer.get(2, 0), None);
        assert_eq!(buffer.get(0, 2), None);
    }
}
