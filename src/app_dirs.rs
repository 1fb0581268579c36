use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn session_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("fastr");
            Some(state_dir.join("session.json"))
        } else {
            ProjectDirs::from("", "", "fastr")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("session.json"))
        }
    }
}
