//! Ledger persistence
//!
//! The whole [`PlayerProgress`] aggregate is stored as one JSON blob in the
//! platform data directory. Loading never fails observably: a missing or
//! corrupt save is replaced with fresh progress which is immediately written
//! back, and the incident surfaces only in the logs. Saves are best-effort;
//! the background variant runs on a detached thread with last-write-wins
//! semantics, which is safe because the aggregate is internally consistent
//! at every save point.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::progress::PlayerProgress;

/// File name of the save blob inside the data directory
const SAVE_FILE: &str = "progress.json";

/// How long startup may wait on the initial load before falling back to
/// fresh progress
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors on the fallible storage plumbing
///
/// Only surfaced by the explicit `try_*` paths; the public contract methods
/// recover internally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no data directory available on this platform")]
    NoDataDir,

    #[error("failed to read saved progress: {0}")]
    Read(#[from] io::Error),

    #[error("failed to decode saved progress: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Handle on the on-disk progress blob
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store at the platform data directory, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be resolved or created.
    pub fn open() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "chromacode").ok_or(StoreError::NoDataDir)?;
        fs::create_dir_all(dirs.data_dir())?;
        Ok(Self {
            path: dirs.data_dir().join(SAVE_FILE),
        })
    }

    /// Store rooted at an explicit file path (tests, portable installs)
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the save blob
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<PlayerProgress, StoreError> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn try_save(&self, progress: &PlayerProgress) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(progress)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the saved progress
    ///
    /// Never fails observably: a missing save starts fresh, a corrupt save
    /// is logged, replaced with fresh progress, and overwritten on the spot.
    #[must_use]
    pub fn load(&self) -> PlayerProgress {
        match self.try_load() {
            Ok(progress) => {
                debug!(path = %self.path.display(), "player progress loaded");
                progress
            }
            Err(StoreError::Read(err)) if err.kind() == io::ErrorKind::NotFound => {
                info!("no saved progress found, starting fresh");
                let fresh = PlayerProgress::new();
                self.save(&fresh);
                fresh
            }
            Err(err) => {
                warn!(%err, "could not load saved progress, starting fresh");
                let fresh = PlayerProgress::new();
                self.save(&fresh);
                fresh
            }
        }
    }

    /// Best-effort synchronous save; failures are logged, never propagated
    pub fn save(&self, progress: &PlayerProgress) {
        match self.try_save(progress) {
            Ok(()) => debug!(path = %self.path.display(), "player progress saved"),
            Err(err) => warn!(%err, "failed to save player progress"),
        }
    }

    /// Fire-and-forget save on a detached thread
    ///
    /// Rapid consecutive calls may race; last write wins, which is fine
    /// because every snapshot is internally consistent.
    pub fn save_in_background(&self, progress: &PlayerProgress) {
        let store = self.clone();
        let snapshot = progress.clone();
        thread::spawn(move || store.save(&snapshot));
    }

    /// Clear the stored progress and reinitialize it
    pub fn reset(&self) -> PlayerProgress {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(%err, "failed to remove saved progress");
            }
        }
        let fresh = PlayerProgress::new();
        self.save(&fresh);
        info!("player progress reset");
        fresh
    }

    /// Decode-check the stored blob without touching any state
    #[must_use]
    pub fn validate(&self) -> bool {
        self.try_load().is_ok()
    }

    /// Pretty-printed JSON of the stored progress (backup and debugging);
    /// `None` when nothing valid is stored
    #[must_use]
    pub fn export_snapshot(&self) -> Option<String> {
        let progress = self.try_load().ok()?;
        serde_json::to_string_pretty(&progress).ok()
    }

    /// Startup load racing a wall-clock timeout
    ///
    /// The load runs on a worker thread; if it has not finished within
    /// `timeout` the caller proceeds with fresh progress so the app never
    /// hangs on a wedged filesystem. The race ends the moment the load
    /// completes.
    #[must_use]
    pub fn load_with_timeout(&self, timeout: Duration) -> PlayerProgress {
        let (tx, rx) = mpsc::channel();
        let store = self.clone();
        thread::spawn(move || {
            // The receiver may be gone after a timeout; nothing to do then
            let _ = tx.send(store.load());
        });

        match rx.recv_timeout(timeout) {
            Ok(progress) => progress,
            Err(_) => {
                warn!(?timeout, "progress load timed out, continuing with fresh state");
                PlayerProgress::new()
            }
        }
    }
}
