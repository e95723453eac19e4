//! Keyed tournament persistence: one JSON file per key, atomic replace,
//! per-key locking to serialize load-mutate-save sequences.

use crate::models::Tournament;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::{fmt, fs};

/// Persistence failures. Load and save are fatal for the command that
/// triggered them; a corrupt record on read is not an error (see [`Store::load`]).
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure on load or save.
    Io(io::Error),
    /// Record could not be encoded for writing.
    Encode(serde_json::Error),
    /// Internal lock poisoned by a panicking thread.
    LockPoisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Storage I/O failure: {e}"),
            StoreError::Encode(e) => write!(f, "Could not encode tournament record: {e}"),
            StoreError::LockPoisoned => write!(f, "Storage lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Encode(e) => Some(e),
            StoreError::LockPoisoned => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Encode(e)
    }
}

/// File-per-key tournament store under one data directory.
pub struct Store {
    data_dir: PathBuf,
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Keys are opaque caller strings (chat ids, group names); map them onto
    /// a safe filename alphabet so no key can escape the data directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.data_dir.join(format!("{safe}.json"))
    }

    /// Load the tournament for `key`. An absent file or a malformed record
    /// yields the default empty tournament; only real I/O failures are errors.
    pub fn load(&self, key: &str) -> Result<Tournament, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Tournament::default()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        match serde_json::from_str(&raw) {
            Ok(tournament) => Ok(tournament),
            Err(e) => {
                log::warn!("Corrupt record for key '{key}' ({e}); starting from empty state");
                Ok(Tournament::default())
            }
        }
    }

    /// Store the tournament for `key` atomically: write a temp file in the
    /// same directory, then rename over the target.
    pub fn save(&self, key: &str, tournament: &Tournament) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(tournament)?;
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn key_lock(&self, key: &str) -> Result<Arc<Mutex<()>>, StoreError> {
        let mut locks = self
            .key_locks
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(locks.entry(key.to_string()).or_default().clone())
    }

    /// Run `f` while holding this key's mutex. Every load-mutate-save
    /// sequence for a key must go through here, so two concurrent commands
    /// for the same key cannot lose each other's updates.
    pub fn with_key_lock<T, E>(&self, key: &str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let lock = self.key_lock(key)?;
        let _guard = lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        f()
    }
}
