//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::arg_parsers::{parse_c_identifier, parse_target_size, TargetSize};
use crate::encode::{SymbolNames, DEFAULT_ARRAY_NAME, DEFAULT_LENGTH_NAME};
use crate::error::ConvertError;
use crate::plan::{Config, ConversionPlan, DEFAULT_OUTPUT, DEFAULT_SIZE};

/// Converts an image into an RGB565 C byte array for an embedded display.
///
/// The image is resized to the display resolution with a bilinear filter
/// (nearest-neighbor for palette images),
/// each pixel is truncated to 5-6-5 bits and stored most significant byte first.
#[derive(Parser, Debug)]
#[command(name = "rgb565-embed", version, long_version = crate::version::version_string())]
pub struct Args {
    /// The image to convert
    #[arg(short, long)]
    pub input: PathBuf,

    /// Generated C source, replaced on every successful run
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write a header declaring the array and its length
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// Display resolution
    #[arg(short, long, value_name = "WxH", value_parser = parse_target_size, default_value_t = DEFAULT_SIZE)]
    pub size: TargetSize,

    /// Name of the byte array
    #[arg(long, value_name = "IDENT", value_parser = parse_c_identifier, default_value = DEFAULT_ARRAY_NAME)]
    pub array_name: String,

    /// Name of the length constant
    #[arg(long, value_name = "IDENT", value_parser = parse_c_identifier, default_value = DEFAULT_LENGTH_NAME)]
    pub length_name: String,

    /// Log progress to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_plan(self) -> Result<ConversionPlan, ConvertError> {
        let config = Config {
            size: self.size,
            names: SymbolNames {
                array: self.array_name,
                length: self.length_name,
            },
            output: self.output,
            header: self.header,
        };
        ConversionPlan::new(self.input, config)
    }
}
