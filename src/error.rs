//! Crate-level error types.

use std::fmt;

/// Errors produced by the gimbal crate.
///
/// The motion core itself has none: all control input is numeric and is
/// handled by clamping, never by rejecting. Errors only arise from the
/// options preset I/O surface.
#[derive(Debug)]
pub enum GimbalError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GimbalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GimbalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GimbalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
