//! Application state.

use crate::store::{load_or_init, ProfileStore, StoreError};
use chrono::NaiveDate;
use quest_core::{Clock, Leitner, Profile, Session, SpacedRepetitionAlgorithm};
use rand::RngCore;

/// Everything one running trainer owns: the store, the injected clock and
/// random source, the loaded profile and the active session, if any.
pub struct AppState {
    pub store: Box<dyn ProfileStore>,
    pub clock: Box<dyn Clock>,
    pub rng: Box<dyn RngCore>,
    pub algorithm: Box<dyn SpacedRepetitionAlgorithm>,
    pub profile: Profile,
    pub session: Option<Session>,
}

impl AppState {
    /// Load (or create) the profile from `store`.
    pub fn open(
        store: Box<dyn ProfileStore>,
        clock: Box<dyn Clock>,
        rng: Box<dyn RngCore>,
    ) -> Result<Self, StoreError> {
        let profile = load_or_init(store.as_ref(), clock.today())?;
        Ok(Self {
            store,
            clock,
            rng,
            algorithm: Box::new(Leitner::default()),
            profile,
            session: None,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Persist the whole profile.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.profile)
    }
}
