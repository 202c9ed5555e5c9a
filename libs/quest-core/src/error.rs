//! Error types for quest-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a bulk import line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing '=' separator at line {line}")]
    MissingSeparator { line: usize },

    #[error("empty term at line {line}")]
    EmptyTerm { line: usize },

    #[error("empty translation at line {line}")]
    EmptyTranslation { line: usize },
}
