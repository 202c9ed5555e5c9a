//! Bulk word import parser.
//!
//! # Format
//! ```text
//! robot = ロボット
//! sensor=センサー
//!
//! equals = a = b
//! ```
//! One entry per line. The first `=` separates term from translation, so
//! the translation may itself contain `=`. Blank lines are ignored.

use crate::error::{ParseError, Result};

/// One parsed `term = translation` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLine {
    pub term: String,
    pub translation: String,
    pub line_number: usize,
}

/// Parse every non-blank line of `content`.
///
/// Each line yields its own result so callers can skip bad lines and keep
/// going.
pub fn parse(content: &str) -> Vec<Result<ImportLine>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Parse a single line.
pub fn parse_line(line: &str, line_number: usize) -> Result<ImportLine> {
    let (term, translation) = line
        .trim()
        .split_once('=')
        .ok_or(ParseError::MissingSeparator { line: line_number })?;

    let term = term.trim();
    let translation = translation.trim();

    if term.is_empty() {
        return Err(ParseError::EmptyTerm { line: line_number });
    }
    if translation.is_empty() {
        return Err(ParseError::EmptyTranslation { line: line_number });
    }

    Ok(ImportLine {
        term: term.to_string(),
        translation: translation.to_string(),
        line_number,
    })
}
