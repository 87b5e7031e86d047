//! Configuration Store
//!
//! Persists the single configured target URL as a one-field JSON file at a
//! per-user location.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

use crate::error::{ShellError, ShellResult};

/// Directory under the user configuration root holding the file
const APP_DIR: &str = "servitech-shell";

/// File name of the persisted configuration
const CONFIG_FILE: &str = "config.json";

/// Serialized shape of the configuration file. Exactly one field, no
/// version marker.
#[derive(Debug, Serialize, Deserialize)]
struct StoredConfig {
    url: String,
}

/// Outcome of a configuration read.
///
/// A missing file, an unreadable file, malformed JSON, and a stored value
/// that is not a URL all collapse into `Absent`; callers never see the
/// cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigState {
    Present(Url),
    Absent,
}

/// Owns the configuration file; no other component touches it.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the per-user default location
    pub fn from_default_location() -> ShellResult<Self> {
        let dir = dirs::config_dir().ok_or(ShellError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted configuration, mapping every failure to `Absent`
    pub async fn read(&self) -> ConfigState {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!("no configuration at {}: {}", self.path.display(), e);
                return ConfigState::Absent;
            }
        };

        let stored: StoredConfig = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(
                    "ignoring malformed configuration at {}: {}",
                    self.path.display(),
                    e
                );
                return ConfigState::Absent;
            }
        };

        match Url::parse(&stored.url) {
            Ok(url) => ConfigState::Present(url),
            Err(e) => {
                warn!("ignoring stored value {:?}: {}", stored.url, e);
                ConfigState::Absent
            }
        }
    }

    /// Overwrite the configuration file in full with the given URL
    pub async fn write(&self, url: &Url) -> ShellResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_string(&StoredConfig {
            url: url.to_string(),
        })?;
        fs::write(&self.path, body).await?;

        info!("configuration saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join(APP_DIR).join(CONFIG_FILE))
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let url = Url::parse("https://cloud.servitechapp.com/myapp").unwrap();

        store.write(&url).await.unwrap();
        assert_eq!(store.read().await, ConfigState::Present(url));
    }

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.read().await, ConfigState::Absent);
    }

    #[tokio::test]
    async fn test_invalid_json_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        fs::write(store.path(), "{not json").await.unwrap();

        assert_eq!(store.read().await, ConfigState::Absent);
    }

    #[tokio::test]
    async fn test_missing_url_field_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        fs::write(store.path(), r#"{"address":"https://example.com"}"#)
            .await
            .unwrap();

        assert_eq!(store.read().await, ConfigState::Absent);
    }

    #[tokio::test]
    async fn test_unparseable_url_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        fs::write(store.path(), r#"{"url":"not a url"}"#).await.unwrap();

        assert_eq!(store.read().await, ConfigState::Absent);
    }

    #[tokio::test]
    async fn test_write_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let first = Url::parse("https://cloud.servitechapp.com/a").unwrap();
        let second = Url::parse("https://cloud.servitechapp.com/b").unwrap();

        store.write(&first).await.unwrap();
        store.write(&second).await.unwrap();

        assert_eq!(store.read().await, ConfigState::Present(second));

        let raw = fs::read_to_string(store.path()).await.unwrap();
        assert!(!raw.contains("/a\""));
    }
}
