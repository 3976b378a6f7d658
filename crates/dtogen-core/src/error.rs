//! Error types for dtogen generation runs

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Broad classification of a [`GenerateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The host or the user withdrew before any text was scanned.
    UserAbort,
    /// The input text did not have the shape the scanners look for.
    StructuralMismatch,
    /// Invalid configuration or edit data.
    Invalid,
}

/// Error type for generation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The host has no text to operate on
    #[error("no active target to generate from")]
    NoActiveTarget,

    /// The suffix prompt was dismissed
    #[error("suffix prompt cancelled")]
    SuffixCancelled,

    /// The naming-style prompt was dismissed
    #[error("no naming style selected")]
    StyleCancelled,

    /// No `class Name {` declaration was found
    #[error("no class declaration found")]
    NoClassFound,

    /// A class was found but none of its lines looked like a field
    #[error("no fields found in class {class}")]
    NoFieldsFound { class: String },

    /// An edit range is out of bounds, splits a character, or overlaps another edit
    #[error("invalid edit: {0}")]
    InvalidEdit(String),

    /// A naming style label that is not one of the supported styles
    #[error("unknown naming style: {0}")]
    UnknownNamingStyle(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenerateError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::NoActiveTarget
            | GenerateError::SuffixCancelled
            | GenerateError::StyleCancelled => ErrorKind::UserAbort,
            GenerateError::NoClassFound | GenerateError::NoFieldsFound { .. } => {
                ErrorKind::StructuralMismatch
            }
            GenerateError::InvalidEdit(_)
            | GenerateError::UnknownNamingStyle(_)
            | GenerateError::Config(_) => ErrorKind::Invalid,
        }
    }
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}
