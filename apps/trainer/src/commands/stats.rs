//! Progress commands.

use crate::state::AppState;
use quest_core::{award_experience, mark_session_done};

use super::deck::CommandError;

/// Snapshot shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusSummary {
    pub streak: u32,
    pub done_today: bool,
    pub experience: u32,
    pub word_count: usize,
    pub strict_mode: bool,
}

pub fn get_status(state: &AppState) -> StatusSummary {
    let profile = &state.profile;
    StatusSummary {
        streak: profile.streak,
        done_today: profile.is_completed_on(state.today()),
        experience: profile.experience,
        word_count: profile.words.len(),
        strict_mode: profile.strict_mode,
    }
}

/// Manually mark today's study as done.
pub fn mark_done(state: &mut AppState) -> Result<StatusSummary, CommandError> {
    let today = state.today();
    mark_session_done(&mut state.profile, false, today);
    state.save()?;
    Ok(get_status(state))
}

/// Award one experience point. Returns the new total.
pub fn add_experience(state: &mut AppState) -> Result<u32, CommandError> {
    award_experience(&mut state.profile, 1);
    state.save()?;
    Ok(state.profile.experience)
}
