//! Local persistence for small string preferences (currently only the theme).
//!
//! The browser build talks to `localStorage`; native builds keep a JSON
//! object in the per-user config directory. Whenever a backend cannot be
//! opened, `default_store()` hands back an in-memory store so the page
//! keeps working for the session.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read preference `{key}`: {reason}")]
    Read { key: String, reason: String },

    /// The backend answered but its contents are unparseable. Writing
    /// replaces them.
    #[error("stored preferences are malformed ({reason})")]
    Corrupt { reason: String },

    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Key/value persistence for string preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Short backend name for log lines.
    fn backend(&self) -> &'static str;
}

/// Session-only store. Used as the fallback backend and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{PreferenceStore, StorageError};

    /// Browser `localStorage`.
    pub struct LocalStorageStore {
        storage: web_sys::Storage,
    }

    impl LocalStorageStore {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
            let storage = window
                .local_storage()
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl PreferenceStore for LocalStorageStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|err| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }

        fn backend(&self) -> &'static str {
            "localStorage"
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{PreferenceStore, StorageError};

    const PREFERENCES_FILE: &str = "preferences.json";

    /// JSON object of string pairs on disk. Every `set` rewrites the file.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config dir>/preferences.json` for the current user.
        pub fn open_default() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("net", "VoidGrief", "voidgrief")
                .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
            Ok(Self::at(dirs.config_dir().join(PREFERENCES_FILE)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self, key: &str) -> Result<BTreeMap<String, String>, StorageError> {
            let raw = match fs::read_to_string(&self.path) {
                Ok(raw) => raw,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
                Err(err) => {
                    return Err(StorageError::Read {
                        key: key.to_string(),
                        reason: err.to_string(),
                    })
                }
            };
            serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt {
                reason: err.to_string(),
            })
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load(key)?.remove(key))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let write_err = |reason: String| StorageError::Write {
                key: key.to_string(),
                reason,
            };

            // A corrupt file is replaced rather than blocking the write.
            let mut entries = self.load(key).unwrap_or_default();
            entries.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).map_err(|err| write_err(err.to_string()))?;
            }
            let json =
                serde_json::to_string_pretty(&entries).map_err(|err| write_err(err.to_string()))?;
            fs::write(&self.path, json).map_err(|err| write_err(err.to_string()))
        }

        fn backend(&self) -> &'static str {
            "file"
        }
    }
}

/// The platform's persistent backend, or a `MemoryStore` if it can't be opened.
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    let opened = LocalStorageStore::open().map(|s| Box::new(s) as Box<dyn PreferenceStore>);

    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStore::open_default().map(|s| {
        tracing::debug!(path = %s.path().display(), "preferences file");
        Box::new(s) as Box<dyn PreferenceStore>
    });

    match opened {
        Ok(store) => store,
        Err(err) => {
            warn!(error = %err, "preferences fall back to memory for this session");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("nested").join("prefs.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn open_default_points_into_config_dir() {
        // CI containers may lack a home directory; only check when one exists.
        if let Ok(store) = FileStore::open_default() {
            assert!(store.path().ends_with("preferences.json"));
        }
    }

    #[test]
    fn file_store_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut first = FileStore::at(&path);
        first.set("theme", "dark").unwrap();
        first.set("other", "kept").unwrap();

        let second = FileStore::at(&path);
        assert_eq!(second.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(second.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn file_store_reports_corrupt_json_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::at(&path);
        assert!(matches!(store.get("theme"), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn file_store_overwrites_corrupt_json_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::at(&path);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn file_store_write_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = FileStore::at(blocker.join("prefs.json"));
        assert!(matches!(
            store.set("theme", "dark"),
            Err(StorageError::Write { .. })
        ));
    }
}
