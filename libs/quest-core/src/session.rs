//! Study sessions.
//!
//! A session walks a selected batch of words, grades each judgment through
//! the scheduler and, for Easy sessions, ends on an example sentence. The
//! session records its own completion in the profile when the last step is
//! acknowledged.

use crate::algorithm::SpacedRepetitionAlgorithm;
use crate::content::{Sentence, SENTENCES};
use crate::progress::mark_session_done;
use crate::selector::select_batch_indices;
use crate::types::{Profile, Word};
use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Session flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// One word, about thirty seconds.
    Quick,
    /// Two words and a short sentence.
    Easy,
}

impl SessionKind {
    /// Number of words drawn for the session.
    pub fn batch_size(self) -> usize {
        match self {
            Self::Quick => 1,
            Self::Easy => 2,
        }
    }

    fn ends_with_sentence(self) -> bool {
        matches!(self, Self::Easy)
    }
}

/// What the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Word {
        position: usize,
        total: usize,
        word: &'a Word,
    },
    Sentence(&'static Sentence),
    Complete,
}

/// Result of feeding an action into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// More steps remain.
    Continue,
    /// The session just finished and was recorded in the profile.
    Completed,
    /// The action did not apply to the current step.
    Ignored,
}

/// An in-progress study session over a profile's words.
#[derive(Debug, Clone)]
pub struct Session {
    kind: SessionKind,
    batch: Vec<usize>,
    position: usize,
    sentence: Option<&'static Sentence>,
    completed: bool,
}

impl Session {
    /// Start a session, or `None` when the profile has no words.
    pub fn start<R>(kind: SessionKind, profile: &Profile, today: NaiveDate, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let batch = select_batch_indices(&profile.words, kind.batch_size(), today, &mut *rng);
        if batch.is_empty() {
            return None;
        }

        let sentence = if kind.ends_with_sentence() {
            SENTENCES.choose(rng)
        } else {
            None
        };

        Some(Self {
            kind,
            batch,
            position: 0,
            sentence,
            completed: false,
        })
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Positions of the selected words in `profile.words`.
    pub fn batch(&self) -> &[usize] {
        &self.batch
    }

    /// Current step, borrowing the word from `profile`.
    pub fn step<'a>(&self, profile: &'a Profile) -> Step<'a> {
        if self.completed {
            return Step::Complete;
        }
        if let Some(&idx) = self.batch.get(self.position) {
            return match profile.words.get(idx) {
                Some(word) => Step::Word {
                    position: self.position,
                    total: self.batch.len(),
                    word,
                },
                None => Step::Complete,
            };
        }
        match self.sentence {
            Some(sentence) => Step::Sentence(sentence),
            None => Step::Complete,
        }
    }

    /// Grade the word currently shown.
    pub fn answer(
        &mut self,
        profile: &mut Profile,
        algorithm: &dyn SpacedRepetitionAlgorithm,
        success: bool,
        today: NaiveDate,
    ) -> SessionEvent {
        if self.completed {
            return SessionEvent::Ignored;
        }
        let Some(word) = self
            .batch
            .get(self.position)
            .and_then(|&idx| profile.words.get_mut(idx))
        else {
            return SessionEvent::Ignored;
        };

        algorithm.grade(word, success, today);
        self.position += 1;

        if self.position < self.batch.len() || self.sentence.is_some() {
            SessionEvent::Continue
        } else {
            self.complete(profile, today)
        }
    }

    /// Acknowledge the closing sentence of an Easy session.
    pub fn finish_sentence(&mut self, profile: &mut Profile, today: NaiveDate) -> SessionEvent {
        if self.completed || self.position < self.batch.len() || self.sentence.is_none() {
            return SessionEvent::Ignored;
        }
        self.complete(profile, today)
    }

    fn complete(&mut self, profile: &mut Profile, today: NaiveDate) -> SessionEvent {
        self.completed = true;
        mark_session_done(profile, true, today);
        SessionEvent::Completed
    }
}
