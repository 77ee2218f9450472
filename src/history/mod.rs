//! Generation history.
//!
//! Every successfully assembled album is appended to a JSON-lines log,
//! keyed by its creation timestamp. The log is read at startup to list
//! previous albums and re-export them. Single-user, single-process:
//! last-write-wins, no locking.

use std::io::Write;
use std::path::PathBuf;

use crate::model::Album;

/// History log failures.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to access history log {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize album for history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only album log backed by a JSON-lines file.
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Open (or lazily create) a log at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one album as a single JSON line.
    pub fn append(&self, album: &Album) -> Result<(), HistoryError> {
        let line = serde_json::to_string(album)?;

        let io_err = |source| HistoryError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        writeln!(file, "{line}").map_err(io_err)?;

        tracing::info!(path = %self.path.display(), title = %album.title, "Album appended to history");
        Ok(())
    }

    /// Load every album in the log, oldest first.
    ///
    /// A missing file is an empty history. Lines that fail to parse are
    /// skipped with a warning so one corrupt entry never hides the rest.
    pub fn load(&self) -> Result<Vec<Album>, HistoryError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut albums = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Album>(line) {
                Ok(album) => albums.push(album),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = number + 1,
                        error = %e,
                        "Skipping unreadable history entry"
                    );
                }
            }
        }
        Ok(albums)
    }

    /// The `count` most recent albums, newest first.
    pub fn recent(&self, count: usize) -> Result<Vec<Album>, HistoryError> {
        let mut albums = self.load()?;
        albums.reverse();
        albums.truncate(count);
        Ok(albums)
    }
}
