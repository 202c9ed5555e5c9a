//! Spaced repetition algorithm implementations.

pub mod leitner;

use crate::types::{BoxLevel, Word};
use chrono::NaiveDate;

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Days until the next review for a word sitting in `level`.
    fn interval_days(&self, level: BoxLevel) -> i64;

    /// Apply a review outcome to `word` in place, graded on `today`.
    fn grade(&self, word: &mut Word, success: bool, today: NaiveDate);
}

/// Get algorithm by name.
pub fn get_algorithm(name: &str) -> Option<Box<dyn SpacedRepetitionAlgorithm>> {
    match name {
        "leitner" => Some(Box::new(leitner::Leitner::default())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(get_algorithm("leitner").map(|a| a.name()), Some("leitner"));
        assert!(get_algorithm("sm2").is_none());
    }
}
