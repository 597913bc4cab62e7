use std::fmt::{Debug, Display};

/// The two ways a conversion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ErrorKind {
    /// The input could not be decoded or processed into a raster:
    /// corrupt data, unsupported format, resampler failure.
    Decode,
    /// Anything else: missing input file, unwritable destination, bad configuration.
    Fault,
}

impl ErrorKind {
    /// Process exit status reported for this kind of failure
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Decode => 255,
            ErrorKind::Fault => 1,
        }
    }
}

pub struct ConvertError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ConvertError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_decode(&self) -> bool {
        self.kind == ErrorKind::Decode
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvertError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for ConvertError {}

/// Errors from `image` only arise once the file is open, so they all mean the content is bad.
/// A truncated file surfaces as `ImageError::IoError` and is still a decode error.
impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        ConvertError::new(ErrorKind::Decode, err.to_string())
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::new(ErrorKind::Fault, err.to_string())
    }
}

#[macro_export]
macro_rules! convert_err {
    ($kind:ident, $($arg:tt)+) => {
        $crate::error::ConvertError::new(
            $crate::error::ErrorKind::$kind,
            format!($($arg)+),
        )
    };
}

/// Like `?`, but turns any displayable error into a [ErrorKind::Fault].
#[macro_export]
macro_rules! fault_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::convert_err!(Fault, "{}", err));
            }
        }
    };
}
