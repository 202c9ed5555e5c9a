//! Trainer configuration.

use std::path::PathBuf;

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "english-quest";

/// Name of the persisted profile record.
pub const PROFILE_KEY: &str = "englishQuest_v2";

/// Where the profile lives on disk.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub data_dir: PathBuf,
    pub profile_key: String,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        // Use app data directory for production, fallback to current dir
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);
        Self::with_data_dir(data_dir)
    }
}

impl TrainerConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            profile_key: PROFILE_KEY.to_string(),
        }
    }

    /// Full path of the profile record.
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.profile_key))
    }
}
