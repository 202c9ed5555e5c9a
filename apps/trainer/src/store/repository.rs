//! Repository pattern for profile persistence.

use crate::store::error::StoreError;
use chrono::NaiveDate;
use quest_core::Profile;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, StoreError>;

/// Storage for the single device-local profile record.
pub trait ProfileStore {
    /// Load the profile. `None` means first run, or a record that could
    /// not be read as a profile.
    fn load(&self) -> Result<Option<Profile>>;

    /// Persist the whole profile.
    fn save(&self, profile: &Profile) -> Result<()>;

    /// Remove the record entirely.
    fn destroy(&self) -> Result<()>;
}

/// Load the stored profile, creating and saving the default one when absent.
pub fn load_or_init(store: &dyn ProfileStore, today: NaiveDate) -> Result<Profile> {
    if let Some(profile) = store.load()? {
        return Ok(profile);
    }

    let profile = Profile::new_default(today);
    store.save(&profile)?;
    tracing::info!(words = profile.words.len(), "created new profile");
    Ok(profile)
}

/// JSON file implementation of [`ProfileStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<Profile>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Invalid UTF-8 and a literal `null` record also mean "no profile".
        match serde_json::from_slice::<Option<Profile>>(&content) {
            Ok(profile) => Ok(profile),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "stored profile is malformed, treating as absent"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, profile: &Profile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(profile)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn destroy(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
