//! Core types for the vocabulary trainer.
//!
//! Field names on the wire follow the persisted profile format
//! (`en`, `jp`, `box`, `due`, `right`, `wrong`, `doneDates`, `lastDone`,
//! `xp`, `schoolMode`).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

use crate::content::DEFAULT_VOCABULARY;

/// Number of built-in vocabulary entries seeded into a fresh profile.
pub const SEED_WORD_COUNT: usize = 10;

/// Leitner box level, always within `0..=BoxLevel::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct BoxLevel(u8);

impl BoxLevel {
    /// Just failed; shortest interval.
    pub const MIN: BoxLevel = BoxLevel(0);
    /// Mastered; longest interval.
    pub const MAX: BoxLevel = BoxLevel(3);

    /// Create a level, clamping into range.
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Next level up, saturating at the top box.
    pub fn promoted(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }
}

impl Default for BoxLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl From<i64> for BoxLevel {
    fn from(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX.0)) as u8)
    }
}

impl From<BoxLevel> for u8 {
    fn from(level: BoxLevel) -> Self {
        level.0
    }
}

/// One vocabulary entry and its review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "en")]
    pub term: String,
    #[serde(rename = "jp")]
    pub translation: String,
    #[serde(rename = "box", default)]
    pub box_level: BoxLevel,
    #[serde(rename = "due", default, deserialize_with = "deserialize_optional_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "right", default)]
    pub correct_count: u32,
    #[serde(rename = "wrong", default)]
    pub incorrect_count: u32,
}

impl Word {
    /// New word in box 1, due today.
    pub fn new(term: impl Into<String>, translation: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            box_level: BoxLevel::default(),
            due_date: Some(today),
            correct_count: 0,
            incorrect_count: 0,
        }
    }

    /// Whether the word is eligible for review on `today`.
    /// Words without a due date are always eligible.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.due_date.map_or(true, |due| due <= today)
    }

    /// Case-insensitive term comparison used for uniqueness.
    pub fn has_term(&self, term: &str) -> bool {
        self.term.to_lowercase() == term.to_lowercase()
    }
}

/// Persisted per-device profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(rename = "doneDates", default, with = "date_set")]
    pub completed_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub streak: u32,
    #[serde(rename = "lastDone", default, deserialize_with = "deserialize_optional_date")]
    pub last_completed_date: Option<NaiveDate>,
    #[serde(rename = "xp", default)]
    pub experience: u32,
    #[serde(rename = "schoolMode", default)]
    pub strict_mode: bool,
}

impl Profile {
    /// Empty profile with no words and no progress.
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            completed_dates: BTreeSet::new(),
            streak: 0,
            last_completed_date: None,
            experience: 0,
            strict_mode: false,
        }
    }

    /// First-run profile seeded from the head of the built-in vocabulary.
    pub fn new_default(today: NaiveDate) -> Self {
        let mut profile = Self::empty();
        profile.words = DEFAULT_VOCABULARY
            .iter()
            .take(SEED_WORD_COUNT)
            .map(|(term, translation)| Word::new(*term, *translation, today))
            .collect();
        profile
    }

    /// Whether any word already uses `term` (case-insensitive).
    pub fn contains_term(&self, term: &str) -> bool {
        self.words.iter().any(|w| w.has_term(term))
    }

    /// Whether a session was completed on `date`.
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::empty()
    }
}

/// Accepts a date string, `null`, or an empty string (treated as unset).
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Completed dates are stored as an object of `"YYYY-MM-DD": true`.
mod date_set {
    use super::*;
    use serde::ser::SerializeMap;

    pub fn serialize<S>(dates: &BTreeSet<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(dates.len()))?;
        for date in dates {
            map.serialize_entry(&date.format("%Y-%m-%d").to_string(), &true)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeSet<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, bool> = BTreeMap::deserialize(deserializer)?;
        raw.into_iter()
            .filter(|(_, done)| *done)
            .map(|(key, _)| {
                NaiveDate::parse_from_str(&key, "%Y-%m-%d").map_err(serde::de::Error::custom)
            })
            .collect()
    }
}
