use std::fmt::{self, Display};

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidId(String),
    UnknownCategory(String),
    UnknownLocale(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(msg) => write!(f, "invalid id: {msg}"),
            ModelError::UnknownCategory(raw) => {
                write!(f, "unknown category '{raw}'")
            }
            ModelError::UnknownLocale(raw) => write!(f, "unknown locale '{raw}'"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
