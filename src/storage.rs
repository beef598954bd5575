//! Persistent key-value slot and the snapshot format kept in it.
//!
//! The task list lives under [`TODOS_KEY`] as a JSON array and the dark-mode
//! flag under [`DARK_MODE_KEY`] as a JSON boolean. Anything unreadable is
//! treated as absent.

use crate::error::StorageError;
use crate::task::Task;
use log::warn;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const TODOS_KEY: &str = "todos";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Port the store persists through. Values are opaque strings.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Reads the task snapshot. Missing, unreadable or malformed data yields an
/// empty list.
pub fn load_tasks<S: KeyValueStore + ?Sized>(storage: &S) -> Vec<Task> {
    let raw = match storage.get(TODOS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=snapshot_read module=storage status=error error={err}");
            return Vec::new();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        warn!("event=snapshot_corrupt module=storage key={TODOS_KEY} error={err}");
        Vec::new()
    })
}

/// Overwrites the task snapshot with the full list.
pub fn save_tasks<S: KeyValueStore + ?Sized>(
    storage: &mut S,
    tasks: &[Task],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string_pretty(tasks).map_err(|source| StorageError::Serialize {
        key: TODOS_KEY,
        source,
    })?;
    storage.set(TODOS_KEY, &raw)
}

/// Reads the dark-mode flag, following the terminal's colour preference when
/// nothing has been saved yet.
pub fn load_dark_mode<S: KeyValueStore + ?Sized>(storage: &S) -> bool {
    load_dark_mode_or(storage, terminal_prefers_dark)
}

/// Like [`load_dark_mode`], with `unset` deciding when the key is absent.
/// A malformed or unreadable value still means light.
pub fn load_dark_mode_or<S: KeyValueStore + ?Sized>(
    storage: &S,
    unset: impl FnOnce() -> bool,
) -> bool {
    match storage.get(DARK_MODE_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("event=snapshot_corrupt module=storage key={DARK_MODE_KEY} error={err}");
            false
        }),
        Ok(None) => unset(),
        Err(err) => {
            warn!("event=dark_mode_read module=storage status=error error={err}");
            false
        }
    }
}

/// Whether the terminal advertises a dark background through `COLORFGBG`.
pub fn terminal_prefers_dark() -> bool {
    env::var("COLORFGBG")
        .ok()
        .is_some_and(|value| colorfgbg_is_dark(&value))
}

/// `COLORFGBG` is `fg;bg` (some terminals insert a middle field); the last
/// field is the ANSI background index.
fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| matches!(bg, 0..=6 | 8))
}

pub fn save_dark_mode<S: KeyValueStore + ?Sized>(
    storage: &mut S,
    enabled: bool,
) -> Result<(), StorageError> {
    storage.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
}
