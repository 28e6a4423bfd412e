//! Crate-level error types.

use std::fmt;

/// Errors produced by the protscape crate.
#[derive(Debug)]
pub enum ProtscapeError {
    /// Dataset arrays violate a shape precondition (mismatched lengths,
    /// duplicate ids, missing feature column).
    DatasetShape(String),
    /// Session JSON parsing/serialization failure.
    SessionParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for ProtscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetShape(msg) => {
                write!(f, "dataset shape error: {msg}")
            }
            Self::SessionParse(msg) => {
                write!(f, "session parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ProtscapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProtscapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
