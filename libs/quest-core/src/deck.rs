//! Adding words to a profile.
//!
//! Both entry points enforce case-insensitive term uniqueness and append in
//! input order.

use crate::content::DEFAULT_VOCABULARY;
use crate::parser;
use crate::types::{Profile, Word};
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub added: usize,
    pub malformed: usize,
    pub duplicates: usize,
}

/// Append every well-formed, previously unseen `term = translation` line.
pub fn import_words(profile: &mut Profile, text: &str, today: NaiveDate) -> ImportReport {
    let mut report = ImportReport::default();

    for result in parser::parse(text) {
        let line = match result {
            Ok(line) => line,
            Err(_) => {
                report.malformed += 1;
                continue;
            }
        };

        if profile.contains_term(&line.term) {
            report.duplicates += 1;
            continue;
        }

        profile.words.push(Word::new(line.term, line.translation, today));
        report.added += 1;
    }

    report
}

/// Append the built-in vocabulary entries the profile does not have yet.
/// Returns the number added.
pub fn load_default_set(profile: &mut Profile, today: NaiveDate) -> usize {
    let mut added = 0;
    for (term, translation) in DEFAULT_VOCABULARY {
        if profile.contains_term(term) {
            continue;
        }
        profile.words.push(Word::new(*term, *translation, today));
        added += 1;
    }
    added
}
