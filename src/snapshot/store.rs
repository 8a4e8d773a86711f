//! Durable snapshot storage.
//!
//! # Responsibilities
//! - Load the previous run's counters
//! - Replace them with the current counters once the run succeeds
//!
//! # Design Decisions
//! - Missing, empty and `null` files mean "no prior history", not an error
//! - Writes go to `<path>.tmp`, are fsynced, then renamed over `<path>`
//! - No inter-process locking: overlapping runs are last-writer-wins

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::Snapshot;
use crate::error::{LoadError, SaveError};

/// Reads and writes the snapshot file at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the previously saved snapshot.
    pub fn load(&self) -> Result<Snapshot, LoadError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No snapshot file, starting without history");
                return Ok(Snapshot::new());
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!(path = %self.path.display(), "Snapshot file is empty, starting without history");
            return Ok(Snapshot::new());
        }

        let previous: Option<Snapshot> =
            serde_json::from_slice(&content).map_err(|source| LoadError::Decode {
                path: self.path.clone(),
                source,
            })?;
        let previous = previous.unwrap_or_default();

        tracing::debug!(path = %self.path.display(), queues = previous.len(), "Loaded snapshot");
        Ok(previous)
    }

    /// Replace the stored snapshot with `snapshot`.
    ///
    /// Returns only after the data has been flushed to disk.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SaveError> {
        let dir = self.dir();
        fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let temp_path = self.temp_path();
        let result = self
            .write_synced(&temp_path, snapshot)
            .and_then(|()| {
                fs::rename(&temp_path, &self.path).map_err(|source| SaveError::Persist {
                    path: self.path.clone(),
                    source,
                })
            })
            // The rename is only durable once the directory entry is flushed.
            .and_then(|()| {
                sync_dir(dir).map_err(|source| SaveError::Persist {
                    path: dir.to_path_buf(),
                    source,
                })
            });

        if let Err(e) = &result {
            tracing::warn!(path = %self.path.display(), error = %e, "Snapshot save failed");
            let _ = fs::remove_file(&temp_path);
            return result;
        }

        tracing::debug!(path = %self.path.display(), queues = snapshot.len(), "Saved snapshot");
        Ok(())
    }

    /// Directory holding the snapshot; `.` for a bare file name.
    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    fn write_synced(&self, temp_path: &Path, snapshot: &Snapshot) -> Result<(), SaveError> {
        let io_err = |source| SaveError::Io {
            path: temp_path.to_path_buf(),
            source,
        };

        let file = File::create(temp_path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, snapshot).map_err(|source| SaveError::Encode {
            path: temp_path.to_path_buf(),
            source,
        })?;
        writer.write_all(b"\n").map_err(io_err)?;

        let file = writer.into_inner().map_err(|e| io_err(e.into_error()))?;
        file.sync_all().map_err(io_err)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
