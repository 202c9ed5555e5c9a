//! Word list commands.

use crate::state::AppState;
use crate::store::StoreError;
use quest_core::{deck, ImportReport, ParseError};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl From<StoreError> for CommandError {
    fn from(e: StoreError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<ParseError> for CommandError {
    fn from(e: ParseError) -> Self {
        Self { message: e.to_string() }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Import `term = translation` lines typed by the user.
pub fn add_words(state: &mut AppState, text: &str) -> Result<ImportReport, CommandError> {
    let today = state.today();
    let report = deck::import_words(&mut state.profile, text, today);
    state.save()?;

    tracing::info!(
        added = report.added,
        malformed = report.malformed,
        duplicates = report.duplicates,
        "imported words"
    );
    Ok(report)
}

/// Append the built-in vocabulary set, skipping words already present.
pub fn load_default_set(state: &mut AppState) -> Result<usize, CommandError> {
    let today = state.today();
    let added = deck::load_default_set(&mut state.profile, today);
    state.save()?;

    tracing::info!(added, "loaded default vocabulary set");
    Ok(added)
}
