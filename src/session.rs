use crate::app_dirs::AppDirs;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persisted fasting session record. All fields default to "no session";
/// absence of the backing file is a normal state, not an error.
///
/// Invariant: `counting == true` implies `start_time` is present.
/// `stop_time` is only meaningful when `counting == false` and a prior
/// `start_time` exists, i.e. a paused session that can be resumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub counting: bool,
}

impl SessionState {
    /// A paused session with both timestamps recorded can be resumed.
    pub fn is_resumable(&self) -> bool {
        !self.counting && self.start_time.is_some() && self.stop_time.is_some()
    }
}

pub trait SessionStore {
    fn load(&self) -> SessionState;
    fn save(&self, state: &SessionState) -> io::Result<()>;
}

/// JSON-file-backed store. Writes are synchronous and last-write-wins;
/// a missing or unreadable file loads as the default (empty) session.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::session_path().unwrap_or_else(|| PathBuf::from("fastr_session.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionState {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(state) = serde_json::from_slice::<SessionState>(&bytes) {
                return state;
            }
        }
        SessionState::default()
    }

    fn save(&self, state: &SessionState) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(state).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

/// In-process store for unit and headless tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: RefCell<SessionState>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn save(&self, state: &SessionState) -> io::Result<()> {
        *self.state.borrow_mut() = state.clone();
        Ok(())
    }
}
