//! User actions exposed to the front end.
//!
//! Every mutating command follows the same three steps: read the profile
//! from `AppState`, mutate it through quest-core, save the whole profile.

pub mod deck;
pub mod settings;
pub mod stats;
pub mod study;

pub use deck::{add_words, load_default_set, CommandError};
pub use settings::{reset_profile, set_strict_mode, Confirm};
pub use stats::{add_experience, get_status, mark_done, StatusSummary};
pub use study::{answer_word, finish_sentence, start_session};
