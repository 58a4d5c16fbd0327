//! Durable key-value storage for user preferences
//!
//! - `FileStore`: TOML file on disk, one string value per key
//! - `MemoryStore`: in-memory map (testing, WASM)

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::utils::error::{KaengError, KaengResult};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "kaeng";

/// Store file name
pub const STORE_FILE_NAME: &str = "store.toml";

/// Trait for string key-value storage
pub trait KeyValueStore {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, persisting it if the store is durable
    fn set(&mut self, key: &str, value: &str) -> KaengResult<()>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> KaengResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store
///
/// The whole table is rewritten on every `set` through a temporary file in
/// the same directory, then renamed over the old one.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file gives an empty store. A file that cannot be read or
    /// parsed is logged and also treated as empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(data) => match toml::from_str::<BTreeMap<String, String>>(&data) {
                Ok(parsed) => parsed,
                Err(error) => {
                    log::warn!("failed to parse store {}: {}", path.display(), error);
                    BTreeMap::new()
                }
            },
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    log::warn!("failed to read store {}: {}", path.display(), error);
                }
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Open the store at the default location
    pub fn open_default() -> KaengResult<Self> {
        Ok(Self::open(default_store_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> KaengResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let data =
            toml::to_string(&self.values).map_err(|e| KaengError::storage(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(data.as_bytes())?;
        temp.persist(&self.path)
            .map_err(|e| KaengError::storage(e.to_string()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> KaengResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// `<config dir>/kaeng/store.toml`
pub fn default_store_path() -> KaengResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
        .ok_or_else(|| KaengError::storage("no config directory on this platform"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.toml");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_corrupt_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);
        store.set("theme", "light").unwrap();
        assert_eq!(FileStore::open(&path).get("theme"), Some("light".to_string()));
    }
}
