//! On-disk storage for the published `latest.json` and `history.json` documents.
//!
//! Both files live in one data directory. Writes go to a temp file in the same
//! directory and are renamed into place, so a reader never sees a partially
//! written document.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config;
use crate::error::{IngestError, Result};
use crate::models::{HistoryEntry, HistorySeries, LatestSnapshot};

/// Reads and writes the two JSON documents under a data directory.
pub struct DataStore {
    /// Directory holding `latest.json` and `history.json`.
    pub data_dir: PathBuf,
}

impl DataStore {
    /// Create a store rooted at `data_dir`.
    ///
    /// If `data_dir` is `None`, uses [`config::default_data_dir`].
    /// Creates the directory if it does not exist.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { data_dir: dir })
    }

    pub fn latest_path(&self) -> PathBuf {
        self.data_dir.join(config::LATEST_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(config::HISTORY_FILE)
    }

    /// Load the current snapshot, or `None` if nothing was published yet.
    ///
    /// Unlike history, a corrupt `latest.json` is reported as an error.
    pub fn load_latest(&self) -> Result<Option<LatestSnapshot>> {
        let path = self.latest_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Load the history series, starting fresh when the file is missing or
    /// its `series` array cannot be read.
    ///
    /// Entries are decoded one at a time; a malformed entry is dropped with a
    /// warning and the rest are kept. Region and unit are always reset to the
    /// fixed values.
    pub fn load_history(&self) -> HistorySeries {
        let path = self.history_path();
        if !path.exists() {
            debug!(path = %path.display(), "No history yet");
            return HistorySeries::empty();
        }

        let raw = match read_series_values(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "History file unreadable; starting a new series"
                );
                return HistorySeries::empty();
            }
        };

        let series: Vec<HistoryEntry> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        index,
                        error = %e,
                        "Dropping malformed history entry"
                    );
                    None
                }
            })
            .collect();
        HistorySeries::from_series(series)
    }

    pub fn write_latest(&self, snapshot: &LatestSnapshot) -> Result<()> {
        write_json_atomic(&self.latest_path(), snapshot)
    }

    pub fn write_history(&self, history: &HistorySeries) -> Result<()> {
        write_json_atomic(&self.history_path(), history)
    }
}

/// Read the raw `series` array of a history document.
fn read_series_values(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)?;
    let mut doc: Value = serde_json::from_str(&contents)?;
    match doc.get_mut("series").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(IngestError::Parse("history `series` is not an array".into())),
        None => Err(IngestError::Parse("history has no `series` field".into())),
    }
}

/// Serialize `value` as pretty JSON and atomically replace `dest`.
///
/// The temp file is created next to `dest` so the final rename stays on one
/// filesystem. It is removed automatically if anything fails before the rename.
pub fn write_json_atomic<T: Serialize>(dest: &Path, value: &T) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;

    debug!(path = %dest.display(), "Wrote document");
    Ok(())
}
