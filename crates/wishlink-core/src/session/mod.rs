//! Session persistence - the one piece of local state
//!
//! Exactly one session is active at a time. It is written by login, removed
//! by logout, and read before every authenticated command. The file lives in
//! the platform data directory unless `WISHLINK_SESSION_PATH` overrides it.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::Session;

/// Resolve the session file path (env override first, then data dir).
pub fn get_session_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("WISHLINK_SESSION_PATH") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let data_dir = dirs::data_dir()
        .ok_or_else(|| Error::config("could not determine the platform data directory"))?;
    Ok(data_dir.join("wishlink").join("session.json"))
}

/// Stores the active session on disk.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store at the default path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: get_session_path()?,
        })
    }

    /// Create a store at a specific path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted session. A missing file means logged out, which is
    /// a normal state, not an error. A file that no longer parses is treated
    /// as logged out too, with a warning.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                log::warn!(
                    "Discarding unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    /// Load the session, failing with an auth error when there is none.
    /// Every authenticated command goes through this gate.
    pub fn require(&self) -> Result<Session> {
        self.load()?
            .ok_or_else(|| Error::auth("not logged in - run `wishlink auth login` first"))
    }

    /// Persist a session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, contents)?;
        log::info!("Session saved for {}", session.username);
        Ok(())
    }

    /// Explicit logout: remove the persisted session. Idempotent.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            log::info!("Session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user_id: "u-1".to_string(),
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_logged_out() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
        assert!(store.require().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("session.json"));
        store.save(&sample_session()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, sample_session());
        assert_eq!(store.require().unwrap().username, "alice");
    }

    #[test]
    fn test_save_replaces_previous_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        store.save(&sample_session()).unwrap();

        let mut other = sample_session();
        other.username = "bob".to_string();
        other.user_id = "u-2".to_string();
        store.save(&other).unwrap();

        assert_eq!(store.load().unwrap().unwrap().username, "bob");
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        store.save(&sample_session()).unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing again is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_treated_as_logged_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = SessionStore::at(path);
        assert!(store.load().unwrap().is_none());
    }
}
