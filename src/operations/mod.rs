//! The pixel transformations between decoding and serialization

mod normalize;
mod quantize;
mod resize;

pub use normalize::to_rgb8;
pub use quantize::{pack_rgb565, quantize, quantize_channel, PixelBuffer};
pub use resize::resample;
