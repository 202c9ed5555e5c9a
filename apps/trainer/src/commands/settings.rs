//! Profile settings commands.

use crate::state::AppState;
use crate::store::load_or_init;

use super::deck::CommandError;

/// Yes/no confirmation supplied by the front end.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub const RESET_PROMPT: &str = "Erase all data and start over?";

/// Turn strict mode on or off and save immediately.
pub fn set_strict_mode(state: &mut AppState, enabled: bool) -> Result<(), CommandError> {
    state.profile.strict_mode = enabled;
    state.save()?;
    Ok(())
}

/// Destroy the stored profile and start again from the default one.
///
/// Strict mode skips the confirmation. Returns whether a reset happened.
pub fn reset_profile(state: &mut AppState, confirm: &mut dyn Confirm) -> Result<bool, CommandError> {
    if !state.profile.strict_mode && !confirm.confirm(RESET_PROMPT) {
        return Ok(false);
    }

    state.store.destroy()?;
    state.session = None;
    state.profile = load_or_init(state.store.as_ref(), state.today())?;

    tracing::info!("profile reset");
    Ok(true)
}
