//! File-backed state store: one JSON file per record key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PersistError, StateStore};

/// A [`StateStore`] that keeps each record in `<data_dir>/<key>.json`.
///
/// The data directory is created on construction. Reads of a missing file
/// come back as `Ok(None)`; everything else surfaces as
/// [`PersistError::Io`] for the caller to report.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) a store rooted at `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Io`] if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| PersistError::Io {
            key: data_dir.display().to_string(),
            source,
        })?;
        Ok(Self { data_dir })
    }

    /// The directory records are stored under.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        // Write to a sibling temp file and rename so a crash mid-write
        // cannot leave a truncated record behind.
        let path = self.record_path(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| PersistError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| PersistError::Io {
            key: key.to_string(),
            source,
        })
    }
}
