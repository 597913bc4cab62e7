use std::{
    io::{BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::{convert_err, error::ConvertError, fault_try};

pub const DEFAULT_ARRAY_NAME: &str = "image_bin";
pub const DEFAULT_LENGTH_NAME: &str = "image_len";

/// Identifiers used in the generated declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNames {
    pub array: String,
    pub length: String,
}

impl Default for SymbolNames {
    fn default() -> Self {
        Self {
            array: DEFAULT_ARRAY_NAME.to_owned(),
            length: DEFAULT_LENGTH_NAME.to_owned(),
        }
    }
}

/// Renders the C source defining the byte array and its length.
///
/// The array body stays on a single line, bytes as `0x` followed by two lowercase hex digits.
pub fn render_source(bytes: &[u8], names: &SymbolNames) -> String {
    let literals: Vec<String> = bytes.iter().map(|byte| format!("0x{byte:02x}")).collect();
    format!(
        "unsigned char {}[] = {{ {} }};\nunsigned int {} = {};\n",
        names.array,
        literals.join(", "),
        names.length,
        bytes.len()
    )
}

/// Renders a header declaring what [render_source] defines.
pub fn render_header(names: &SymbolNames) -> String {
    format!(
        "#pragma once\n\nextern unsigned char {}[];\nextern unsigned int {};\n",
        names.array, names.length
    )
}

/// Replaces the file at `path` with `contents`.
///
/// The data goes to a temporary file next to the destination first and is renamed over it
/// only once fully flushed, so a failed run never leaves a truncated artifact behind.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ConvertError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = NamedTempFile::new_in(dir).map_err(|error| {
        convert_err!(
            Fault,
            "unable to create output file in '{}': {error}",
            dir.display()
        )
    })?;

    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);
    fault_try!(writer.write_all(contents.as_bytes()));
    // The buffer would be flushed on drop too, but that swallows errors.
    let file = fault_try!(writer.into_inner().map_err(|err| err.into_error()));
    fault_try!(file.as_file().sync_all());

    file.persist(path).map_err(|err| {
        convert_err!(
            Fault,
            "unable to write '{}': {}",
            path.display(),
            err.error
        )
    })?;
    Ok(())
}
