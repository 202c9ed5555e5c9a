//! English Quest: a low-pressure vocabulary trainer for the terminal.
//!
//! The profile is stored as one JSON record in the local data directory and
//! saved in full after every action.

pub mod commands;
pub mod config;
pub mod console;
pub mod render;
pub mod state;
pub mod store;

use anyhow::Context;
use config::TrainerConfig;
use console::Console;
use quest_core::SystemClock;
use state::AppState;
use std::io;
use store::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with the cards.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TrainerConfig::default();
    let profile_path = config.profile_path();
    tracing::info!(path = %profile_path.display(), "opening profile");

    let store = JsonFileStore::open(&profile_path);
    let mut state = AppState::open(Box::new(store), Box::new(SystemClock), Box::new(rand::rng()))
        .with_context(|| format!("failed to open profile at {}", profile_path.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock())
        .run(&mut state)
        .context("console i/o failed")?;

    Ok(())
}
