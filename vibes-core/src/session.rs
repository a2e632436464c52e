//! The logged-in user, kept on disk between runs.
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub token: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not access session file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session file {} is corrupted: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `None` when nobody is logged in.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| SessionError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(session).map_err(|source| {
            SessionError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        info!(user = %session.username, "session saved");
        Ok(())
    }

    /// Forgets the stored session. Clearing when nothing is stored is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("session cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mk_config;
    use tempfile::tempdir;

    fn session() -> Session {
        Session {
            user_id: "12".into(),
            token: "t0k3n".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn missing_file_means_logged_out() {
        let tmp = tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("none.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_returns_same_session() {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().join("nested"));
        let store = SessionStore::new(&config.session_file);
        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));
    }

    #[test]
    fn clear_removes_the_session_and_is_idempotent() {
        let tmp = tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        store.save(&session()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn corrupted_file_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();
        let err = SessionStore::new(&path).load().unwrap_err();
        assert!(matches!(err, SessionError::Malformed { .. }));
    }
}
