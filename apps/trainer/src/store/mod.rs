//! Local profile persistence.

pub mod error;
pub mod repository;

pub use error::StoreError;
pub use repository::{load_or_init, JsonFileStore, ProfileStore};
