//! Core vocabulary trainer library.
//!
//! Provides:
//! - Leitner box scheduling behind a swappable algorithm trait
//! - Due-word selection with deterministic priority ordering
//! - Daily streak and experience bookkeeping
//! - `term = translation` bulk import parser
//! - Built-in vocabulary, example sentences and grammar tips
//! - Quick and Easy study session state machines
//! - Shared types (Word, BoxLevel, Profile)

pub mod algorithm;
pub mod clock;
pub mod content;
pub mod deck;
pub mod error;
pub mod parser;
pub mod progress;
pub mod selector;
pub mod session;
pub mod types;

pub use algorithm::{get_algorithm, leitner::Leitner, SpacedRepetitionAlgorithm};
pub use clock::{day_diff, Clock, FixedClock, SystemClock};
pub use content::{grammar_tip, GrammarTip, Sentence, DEFAULT_VOCABULARY, GRAMMAR_TIPS, SENTENCES};
pub use deck::{import_words, load_default_set, ImportReport};
pub use error::{ParseError, Result};
pub use parser::{parse, parse_line, ImportLine};
pub use progress::{award_experience, mark_session_done};
pub use selector::{select_batch, select_batch_indices};
pub use session::{Session, SessionEvent, SessionKind, Step};
pub use types::{BoxLevel, Profile, Word};
