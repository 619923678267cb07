//! JSON-file durable storage for the CLI session.
//!
//! DESIGN
//! ======
//! The file holds one flat JSON object of string values, mirroring browser
//! `localStorage`. It is re-read on every access so concurrent CLI
//! invocations see each other's logins. A missing or unreadable file reads
//! as empty. The file holds a bearer token, so on unix it is kept at mode
//! 0600.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use session::{DurableStorage, StorageError};

/// File name used under `$HOME` when no state file is configured.
pub const DEFAULT_STATE_FILE: &str = ".workout-cli.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed state file");
            BTreeMap::new()
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(map).map_err(|e| StorageError::Write(e.to_string()))?;
        let mut file = open_private(&self.path).map_err(|e| StorageError::Write(e.to_string()))?;
        file.write_all(raw.as_bytes())
            .map_err(|e| StorageError::Write(e.to_string()))
    }
}

/// Open `path` for rewriting, readable by the owner only.
///
/// Files left behind with wider permissions are tightened too.
#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

impl DurableStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map();
        map.insert(key.to_owned(), value.to_owned());
        self.write_map(&map)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map();
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

/// `$HOME/.workout-cli.json`, or the current directory without `$HOME`.
pub fn default_state_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(DEFAULT_STATE_FILE)
}
