//! Statistics persistence
//!
//! The engine never touches the filesystem itself; a `StatsStore` is handed
//! to the `Game` and consulted on startup and after every finished session.

use crate::game::Statistics;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by a statistics store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed statistics in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent statistics in {path}: counters do not add up")]
    Inconsistent { path: PathBuf },
}

/// Load/save capability for `Statistics`
pub trait StatsStore {
    /// Previously saved statistics, or `None` if nothing was saved yet
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read.
    fn load(&self) -> Result<Option<Statistics>, StoreError>;

    /// Persist `statistics`, replacing whatever was saved before
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be written.
    fn save(&self, statistics: &Statistics) -> Result<(), StoreError>;
}

impl<T: StatsStore + ?Sized> StatsStore for Box<T> {
    fn load(&self) -> Result<Option<Statistics>, StoreError> {
        (**self).load()
    }

    fn save(&self, statistics: &Statistics) -> Result<(), StoreError> {
        (**self).save(statistics)
    }
}

/// Keeps statistics for the lifetime of the process only
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Statistics>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `statistics` already saved
    #[must_use]
    pub fn with(statistics: Statistics) -> Self {
        Self {
            saved: RefCell::new(Some(statistics)),
        }
    }

    #[must_use]
    pub fn saved(&self) -> Option<Statistics> {
        *self.saved.borrow()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Option<Statistics>, StoreError> {
        Ok(self.saved())
    }

    fn save(&self, statistics: &Statistics) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = Some(*statistics);
        Ok(())
    }
}

/// Statistics kept as a small JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Statistics>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved statistics yet");
                return Ok(None);
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let statistics: Statistics =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        if !statistics.is_consistent() {
            return Err(StoreError::Inconsistent {
                path: self.path.clone(),
            });
        }

        Ok(Some(statistics))
    }

    /// Write a sibling temp file, then rename it over the target
    fn save(&self, statistics: &Statistics) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|err| self.io_error(err))?;

        let json = serde_json::to_string_pretty(statistics).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|err| self.io_error(err))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|err| self.io_error(err))?;
        file.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        tracing::debug!(path = %self.path.display(), "saved statistics");
        Ok(())
    }
}
