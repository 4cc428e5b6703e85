// File cache - persists serialized entries to a single JSON file
// Reads the file on every call so several processes can share one path

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::ports::{CacheError, DictionaryCache};

/// Cache persisted as a single JSON object mapping words to serialized
/// entries.
///
/// Writes go through a temp file followed by a rename, so readers only ever
/// see a complete file. Writers are serialized with a mutex; reads run
/// unlocked because the rename swaps files atomically.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCache {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the whole cache map. A missing file is an empty cache.
    async fn read_entries(&self) -> Result<HashMap<String, String>, CacheError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(CacheError::Read(err.to_string())),
        };

        serde_json::from_str(&content).map_err(|err| CacheError::Read(err.to_string()))
    }

    /// Persist the map with a temp file and an atomic rename.
    async fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| CacheError::Write(err.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|err| CacheError::Write(err.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)
                .await
                .map_err(|err| CacheError::Write(format!("could not create temp file: {err}")))?;
            file.write_all(content.as_bytes())
                .await
                .map_err(|err| CacheError::Write(format!("could not write: {err}")))?;
            file.sync_all()
                .await
                .map_err(|err| CacheError::Write(format!("could not sync: {err}")))?;
        }

        if let Err(err) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(CacheError::Write(format!(
                "could not replace the cache file: {err}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl DictionaryCache for FileCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.read_entries().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, entry: &str) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().await;

        // A damaged file would otherwise block every future write. Start the
        // map over and let the rename below put a readable file back.
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(err) => {
                crate::warn!("discarding unreadable cache file {:?}: {err}", self.path);
                HashMap::new()
            }
        };

        entries.insert(key.to_string(), entry.to_string());
        self.write_entries(&entries).await
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
