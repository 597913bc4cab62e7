use std::num::NonZeroU32;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::arg_parsers::TargetSize;
use crate::decode::decode;
use crate::encode::{self, SymbolNames};
use crate::error::ConvertError;
use crate::{convert_err, operations};

/// Resolution of the panel the firmware drives
pub const DEFAULT_SIZE: TargetSize = match (NonZeroU32::new(320), NonZeroU32::new(240)) {
    (Some(width), Some(height)) => TargetSize::new(width, height),
    _ => unreachable!(),
};

/// Where the firmware build picks up the generated source
pub const DEFAULT_OUTPUT: &str = "main/image.c";

/// Steps of a conversion, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Decoding,
    Resampling,
    Quantizing,
    Serializing,
    Writing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: TargetSize,
    pub names: SymbolNames,
    pub output: PathBuf,
    /// Also emit a header with `extern` declarations
    pub header: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            names: SymbolNames::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            header: None,
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub pixel_count: usize,
    pub byte_len: usize,
    pub written: Vec<PathBuf>,
}

/// A single input image and everything needed to turn it into C source
#[derive(Debug, Clone)]
pub struct ConversionPlan {
    pub input: PathBuf,
    pub config: Config,
}

impl ConversionPlan {
    pub fn new(input: impl Into<PathBuf>, config: Config) -> Result<Self, ConvertError> {
        if config.names.array == config.names.length {
            return Err(convert_err!(
                Fault,
                "array and length must have different names, both are `{}'",
                config.names.array
            ));
        }
        if let Some(header) = config.header.as_deref().filter(|h| same_file(h, &config.output)) {
            return Err(convert_err!(
                Fault,
                "header '{}' and source '{}' are the same file",
                header.display(),
                config.output.display()
            ));
        }
        Ok(Self {
            input: input.into(),
            config,
        })
    }

    /// Runs the whole pipeline. Nothing is written unless every earlier stage succeeded.
    pub fn execute(&self) -> Result<Artifact, ConvertError> {
        crate::init::init();
        let size = self.config.size;

        let source = in_stage(Stage::Decoding, || decode(&self.input))?;
        debug!(
            format = ?source.format,
            color_type = ?source.properties.color_type,
            palette = source.properties.palette,
            width = source.width(),
            height = source.height(),
            "decoded {}",
            source.properties.filename.display()
        );

        let resized = in_stage(Stage::Resampling, || {
            let palette = source.properties.palette;
            operations::resample(source.pixels, palette, size).map(operations::to_rgb8)
        })?;

        let buffer = in_stage(Stage::Quantizing, || Ok(operations::quantize(&resized)))?;
        if buffer.pixels().len() != size.pixel_count() {
            return Err(convert_err!(
                Decode,
                "expected {} pixels, got {}",
                size.pixel_count(),
                buffer.pixels().len()
            ));
        }

        let (source_text, header_text) = in_stage(Stage::Serializing, || {
            let bytes = buffer.to_be_bytes();
            let header = self
                .config
                .header
                .as_ref()
                .map(|_| encode::render_header(&self.config.names));
            Ok((encode::render_source(&bytes, &self.config.names), header))
        })?;

        let written = in_stage(Stage::Writing, || {
            let mut written = Vec::new();
            write_one(&self.config.output, &source_text, &mut written)?;
            if let (Some(path), Some(text)) = (&self.config.header, &header_text) {
                write_one(path, text, &mut written)?;
            }
            Ok(written)
        })?;

        Ok(Artifact {
            pixel_count: buffer.pixels().len(),
            byte_len: buffer.byte_len(),
            written,
        })
    }
}

fn in_stage<T>(
    stage: Stage,
    f: impl FnOnce() -> Result<T, ConvertError>,
) -> Result<T, ConvertError> {
    let _span = info_span!("stage", name = %stage).entered();
    let result = f();
    if let Err(err) = &result {
        debug!(kind = %err.kind, "{stage} failed");
    }
    result
}

/// Whether two output paths name the same file, even when spelled differently.
/// Neither file needs to exist, only their parent directories are resolved.
fn same_file(a: &Path, b: &Path) -> bool {
    let (a, b) = (without_cur_dir(a), without_cur_dir(b));
    if a == b {
        return true;
    }
    if a.file_name().is_none() || a.file_name() != b.file_name() {
        return false;
    }
    let resolved_parent = |path: &Path| {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .canonicalize()
    };
    matches!(
        (resolved_parent(a.as_path()), resolved_parent(b.as_path())),
        (Ok(a), Ok(b)) if a == b
    )
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn write_one(path: &Path, text: &str, written: &mut Vec<PathBuf>) -> Result<(), ConvertError> {
    encode::write_artifact(path, text)?;
    info!(bytes = text.len(), "wrote {}", path.display());
    written.push(path.to_owned());
    Ok(())
}
