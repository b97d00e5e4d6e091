//! File-backed key-value store
//!
//! Each key lives in its own `<key>.json` file under the data directory.
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write leaves the previous value intact.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{QuoterError, QuoterResult};
use crate::traits::KeyValueStore;
use shared::session_debug;

/// Default location when neither flag nor environment names a directory
pub const DEFAULT_DATA_DIR: &str = "./.concre7";

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new() -> Self {
        Self::with_base_dir(PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn key_path(&self, key: &str) -> QuoterResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(QuoterError::persistence(key, "invalid key name"));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl Default for FileKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> QuoterResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QuoterError::persistence(key, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> QuoterResult<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| QuoterError::persistence(key, e))?;

        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| QuoterError::persistence(key, e))?;
        file.write_all(value.as_bytes())
            .await
            .map_err(|e| QuoterError::persistence(key, e))?;
        file.sync_all()
            .await
            .map_err(|e| QuoterError::persistence(key, e))?;
        drop(file);

        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| QuoterError::persistence(key, e))?;

        session_debug!("💾 Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> QuoterResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(QuoterError::persistence(key, e)),
        }
    }
}
