//! Workspace Loader Module
//!
//! Handles asynchronous workspace loading in a background thread to avoid
//! blocking the UI. Uses channels for thread communication following the
//! pattern used by the direct-message worker.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use super::Workspace;
use crate::error::ChanhopError;

/// Represents the current state of workspace loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete,
    Error(ChanhopError),
}

/// Manages asynchronous workspace loading in a background thread
pub struct WorkspaceLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<Workspace, ChanhopError>>>,
}

impl WorkspaceLoader {
    /// Spawn a background thread to load a snapshot file
    pub fn spawn_load(path: PathBuf) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_file_sync(&path);
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Spawn a background thread to load a snapshot from stdin
    pub fn spawn_load_stdin() -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_stdin_sync();
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while the loader thread is still running, or Some with
    /// the result once it finishes. Subsequent calls return None.
    pub fn poll(&mut self) -> Option<Result<Workspace, ChanhopError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = match &result {
                    Ok(_) => LoadingState::Complete,
                    Err(e) => LoadingState::Error(e.clone()),
                };
                Some(result)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.rx = None;
                let err = ChanhopError::Io("Workspace loader thread disconnected".to_string());
                self.state = LoadingState::Error(err.clone());
                Some(Err(err))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

/// Synchronous file loading (runs in background thread)
fn load_file_sync(path: &Path) -> Result<Workspace, ChanhopError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ChanhopError::WorkspaceNotFound(path.display().to_string())
        } else {
            ChanhopError::Io(e.to_string())
        }
    })?;

    Workspace::parse(&contents)
}

/// Synchronous stdin loading (runs in background thread)
fn load_stdin_sync() -> Result<Workspace, ChanhopError> {
    use std::io::Read;

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    Workspace::parse(&buffer)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
