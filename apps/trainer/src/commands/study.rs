//! Study session commands.

use crate::state::AppState;
use quest_core::{Session, SessionEvent, SessionKind};

use super::deck::CommandError;

/// Start a new session, replacing any unfinished one.
/// Returns `false` when there are no words to study.
pub fn start_session(state: &mut AppState, kind: SessionKind) -> Result<bool, CommandError> {
    let today = state.today();
    state.session = Session::start(kind, &state.profile, today, state.rng.as_mut());
    Ok(state.session.is_some())
}

/// Record the judgment for the word currently shown and save.
pub fn answer_word(state: &mut AppState, success: bool) -> Result<SessionEvent, CommandError> {
    let today = state.today();
    let Some(session) = state.session.as_mut() else {
        return Ok(SessionEvent::Ignored);
    };

    let event = session.answer(&mut state.profile, state.algorithm.as_ref(), success, today);
    tracing::debug!(success, ?event, "recorded judgment");
    settle(state, event)
}

/// Acknowledge the closing sentence of an Easy session.
pub fn finish_sentence(state: &mut AppState) -> Result<SessionEvent, CommandError> {
    let today = state.today();
    let Some(session) = state.session.as_mut() else {
        return Ok(SessionEvent::Ignored);
    };

    let event = session.finish_sentence(&mut state.profile, today);
    settle(state, event)
}

fn settle(state: &mut AppState, event: SessionEvent) -> Result<SessionEvent, CommandError> {
    match event {
        SessionEvent::Ignored => return Ok(event),
        SessionEvent::Continue => {}
        SessionEvent::Completed => {
            state.session = None;
            tracing::info!(
                streak = state.profile.streak,
                xp = state.profile.experience,
                "session completed"
            );
        }
    }
    state.save()?;
    Ok(event)
}
