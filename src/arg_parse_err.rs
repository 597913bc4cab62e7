use std::{fmt::Display, num::ParseIntError};

/// Error reporting for argument value parsing.
/// `clap` prefixes the offending value and flag name, so this only carries the reason.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgParseErr {
    pub message: Option<String>,
}

impl ArgParseErr {
    pub fn with_msg(str: impl ToString) -> Self {
        let string = str.to_string();
        Self {
            message: Some(string),
        }
    }
}

impl Display for ArgParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => f.write_str(msg),
            None => f.write_str("invalid argument"),
        }
    }
}

impl std::error::Error for ArgParseErr {}

impl From<ParseIntError> for ArgParseErr {
    fn from(value: ParseIntError) -> Self {
        Self::with_msg(value)
    }
}
