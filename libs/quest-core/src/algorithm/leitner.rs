//! Four-box Leitner scheduler.
//!
//! A correct answer moves a word up one box, a miss sends it straight back
//! to box 0. The next due date is always measured from the day of grading,
//! so missed days carry no penalty beyond the reset itself.

use super::SpacedRepetitionAlgorithm;
use crate::clock::add_days;
use crate::types::{BoxLevel, Word};
use chrono::NaiveDate;

/// Leitner box scheduler with a per-box interval table.
#[derive(Debug, Clone)]
pub struct Leitner {
    /// Review interval in days, indexed by box level.
    pub intervals: [i64; 4],
}

impl Default for Leitner {
    fn default() -> Self {
        Self {
            intervals: [1, 1, 3, 7],
        }
    }
}

impl SpacedRepetitionAlgorithm for Leitner {
    fn name(&self) -> &'static str {
        "leitner"
    }

    fn interval_days(&self, level: BoxLevel) -> i64 {
        self.intervals[usize::from(level.value())]
    }

    fn grade(&self, word: &mut Word, success: bool, today: NaiveDate) {
        if success {
            word.correct_count = word.correct_count.saturating_add(1);
            word.box_level = word.box_level.promoted();
        } else {
            word.incorrect_count = word.incorrect_count.saturating_add(1);
            word.box_level = BoxLevel::MIN;
        }
        word.due_date = Some(add_days(today, self.interval_days(word.box_level)));
    }
}
