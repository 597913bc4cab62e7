//! Converts images into RGB565 C byte arrays for firmware driving a fixed-resolution display.
//!
//! The pipeline is decode, normalize to 8-bit RGB, bilinear resample, quantize to 5-6-5,
//! then render `unsigned char` array source. See [plan::ConversionPlan] for the entry point.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod decode;
pub mod encode;
pub mod error;
pub mod image;
pub mod init;
pub mod operations;
pub mod plan;
pub mod version;
