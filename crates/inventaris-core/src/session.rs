//! Persistent login session storage.
//!
//! The backend issues a bearer token on login; the client keeps it, together
//! with the authenticated user, in a small JSON file so commands across
//! invocations share one login. The file is the single source of truth: it
//! is written on login, removed on logout, and removed again whenever the
//! backend answers 401.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::models::User;

/// An authenticated session as persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Bearer token issued by the backend
    pub token: String,
    /// The authenticated user at login time
    pub user: User,
}

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// Creates a store at the default path following the XDG Base Directory
    /// specification.
    pub fn default_location() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix("inventaris")
            .place_data_file("session.json")
            .map_err(|e| ApiError::XdgDirectory(e.to_string()))?;
        Ok(SessionStore { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the current session, if any.
    ///
    /// A corrupt file is treated as no session: it is removed so the next
    /// login starts clean, rather than failing every subsequent command.
    pub fn current(&self) -> Result<Option<Session>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ApiError::FileSystem {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(
                    "Discarding unreadable session file at {}: {e}",
                    self.path.display()
                );
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Persists a session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ApiError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, json).map_err(|source| ApiError::FileSystem {
            path: self.path.clone(),
            source,
        })
    }

    /// Removes the stored session. Succeeds when no session exists.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ApiError::FileSystem {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Role;

    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "tok-abc123".to_string(),
            user: User {
                id: 1,
                name: "Budi".to_string(),
                email: "budi@kantor.id".to_string(),
                role: Role::Admin,
            },
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.current().unwrap(), None);

        let session = sample_session();
        store.save(&session).unwrap();
        assert_eq!(store.current().unwrap(), Some(session));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested/deeper/session.json"));
        store.save(&sample_session()).unwrap();
        assert!(store.current().unwrap().is_some());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.clear().unwrap();

        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.current().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = SessionStore::new(&path);
        assert_eq!(store.current().unwrap(), None);
        // The broken file is gone, so a fresh login can proceed.
        assert!(!path.exists());
    }
}
