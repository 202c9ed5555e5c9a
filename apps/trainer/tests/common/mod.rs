//! Shared test context for trainer integration tests.

#![allow(dead_code)]

use std::rc::Rc;

use chrono::NaiveDate;
use english_quest::state::AppState;
use english_quest::store::{JsonFileStore, ProfileStore};
use quest_core::{FixedClock, Profile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Temporary data directory plus a clock the test can move.
pub struct TestContext {
    pub dir: TempDir,
    pub clock: Rc<FixedClock>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
            clock: Rc::new(FixedClock::new(Self::start_date())),
        }
    }

    pub fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    }

    /// Store pointing at this context's profile file.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::open(self.dir.path().join("englishQuest_v2.json"))
    }

    /// Open application state with a seeded random source.
    pub fn open_state(&self) -> AppState {
        AppState::open(
            Box::new(self.store()),
            Box::new(Rc::clone(&self.clock)),
            Box::new(StdRng::seed_from_u64(1234)),
        )
        .expect("open state")
    }

    /// What is currently on disk.
    pub fn stored_profile(&self) -> Profile {
        self.store()
            .load()
            .expect("load profile")
            .expect("profile present")
    }

    pub fn write_raw(&self, content: &str) {
        std::fs::write(self.store().path(), content).expect("write raw profile");
    }
}
