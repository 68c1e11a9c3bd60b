//! File-based session store
//!
//! Implements [`SessionStorePort`] as a flat JSON object of string entries in
//! the application data directory, the client-side equivalent of browser
//! local storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use wl_core::ports::SessionStorePort;

pub const DEFAULT_SESSION_FILE: &str = "session.json";
const TEMP_FILE_SUFFIX: &str = "tmp";

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session file I/O failed at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session file {} is not a JSON object of strings", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

type Entries = BTreeMap<String, String>;

pub struct FileSessionStore {
    session_file_path: PathBuf,
    /// Held for every file access; writes truncate before they fill.
    file_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create store with custom file path
    pub fn new(session_file_path: PathBuf) -> Self {
        Self {
            session_file_path,
            file_lock: Mutex::new(()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: &Path) -> Self {
        Self::new(base_dir.join(DEFAULT_SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.session_file_path
    }

    fn io_error(&self, source: std::io::Error) -> SessionStoreError {
        SessionStoreError::Io {
            path: self.session_file_path.clone(),
            source,
        }
    }

    async fn read_entries(&self) -> Result<Entries, SessionStoreError> {
        let content = match fs::read_to_string(&self.session_file_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|source| SessionStoreError::Corrupt {
            path: self.session_file_path.clone(),
            source,
        })
    }

    /// Read entries before a write. A corrupt file is discarded so the
    /// write can replace it; the flag reports whether that happened.
    async fn read_entries_for_update(&self) -> Result<(Entries, bool), SessionStoreError> {
        match self.read_entries().await {
            Ok(entries) => Ok((entries, false)),
            Err(SessionStoreError::Corrupt { path, source }) => {
                warn!(
                    path = %path.display(),
                    error = %source,
                    "session file is corrupt, starting from an empty store"
                );
                Ok((Entries::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    fn temp_file_path(&self) -> PathBuf {
        self.session_file_path.with_extension(TEMP_FILE_SUFFIX)
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.session_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| {
            SessionStoreError::Corrupt {
                path: self.session_file_path.clone(),
                source,
            }
        })?;

        // Fill a sibling file, then swap it in: the session file is
        // either the old or the new content, never a truncated one.
        let temp_path = self.temp_file_path();
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| self.io_error(e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| self.io_error(e))?;
        file.sync_all().await.map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&temp_path, &self.session_file_path)
            .await
            .map_err(|e| self.io_error(e))?;

        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.file_lock.lock().await;
        let entries = self.read_entries().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.file_lock.lock().await;
        let (mut entries, _) = self.read_entries_for_update().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;
        debug!(key, "session entry written");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.file_lock.lock().await;
        let (mut entries, recovered) = self.read_entries_for_update().await?;
        if entries.remove(key).is_some() || recovered {
            self.write_entries(&entries).await?;
            debug!(key, "session entry removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_item_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("nonexistent.json"));

        assert_eq!(store.get_item("access_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_item_and_get_item() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session.json"));

        store.set_item("access_token", "A").await.unwrap();
        store.set_item("refresh_token", "B").await.unwrap();

        assert_eq!(
            store.get_item("access_token").await.unwrap().as_deref(),
            Some("A")
        );
        assert_eq!(
            store.get_item("refresh_token").await.unwrap().as_deref(),
            Some("B")
        );
    }

    #[tokio::test]
    async fn test_set_item_overwrites_existing_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session.json"));

        store.set_item("access_token", "old").await.unwrap();
        store.set_item("access_token", "new").await.unwrap();

        assert_eq!(
            store.get_item("access_token").await.unwrap().as_deref(),
            Some("new")
        );
    }

    #[tokio::test]
    async fn test_remove_item() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session.json"));

        store.set_item("user", "{\"id\":1}").await.unwrap();
        store.remove_item("user").await.unwrap();
        store.remove_item("missing").await.unwrap();

        assert_eq!(store.get_item("user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("session.json");
        let store = FileSessionStore::new(path.clone());

        store.set_item("access_token", "A").await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path());

        assert_eq!(store.path(), temp_dir.path().join(DEFAULT_SESSION_FILE));
    }

    #[tokio::test]
    async fn test_empty_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "").await.unwrap();

        let store = FileSessionStore::new(path);

        assert_eq!(store.get_item("access_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "{invalid json").await.unwrap();

        let store = FileSessionStore::new(path);
        let err = store.get_item("access_token").await.unwrap_err();

        assert!(err.to_string().contains("not a JSON object"));
    }

    #[tokio::test]
    async fn test_set_item_replaces_torn_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, r#"{"access_token": "old"#).await.unwrap();

        let store = FileSessionStore::new(path.clone());
        store.set_item("access_token", "A").await.unwrap();
        store.set_item("refresh_token", "B").await.unwrap();

        assert_eq!(
            store.get_item("access_token").await.unwrap().as_deref(),
            Some("A")
        );
        assert_eq!(
            store.get_item("refresh_token").await.unwrap().as_deref(),
            Some("B")
        );
        let content = fs::read_to_string(&path).await.unwrap();
        assert!(!content.contains("old"));
    }

    #[tokio::test]
    async fn test_remove_item_clears_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "{invalid json").await.unwrap();

        let store = FileSessionStore::new(path);
        store.remove_item("user").await.unwrap();

        assert_eq!(store.get_item("access_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session.json"));

        store.set_item("access_token", "A").await.unwrap();

        assert!(!temp_dir.path().join("session.tmp").exists());
        assert!(temp_dir.path().join("session.json").exists());
    }

    #[tokio::test]
    async fn test_concurrent_writes_keep_every_entry() {
        let temp_dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(FileSessionStore::new(
            temp_dir.path().join("session.json"),
        ));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .set_item(&format!("key-{i}"), &i.to_string())
                        .await
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..8 {
            assert_eq!(
                store.get_item(&format!("key-{i}")).await.unwrap(),
                Some(i.to_string())
            );
        }
    }
}
