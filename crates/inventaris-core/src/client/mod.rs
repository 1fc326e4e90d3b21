//! High-level API client for the inventory borrowing backend.
//!
//! This module provides the main [`ApiClient`] interface. The client acts as
//! the central coordinator between the application layers and the backend's
//! HTTP API, implementing validation, session handling, and response
//! normalization in one place.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │    ApiClient    │    │    Backend      │
//! │ (auth, products,│───▶│ (session, urls, │───▶│  (HTTP + JSON)  │
//! │  borrowings, …) │    │  envelope)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`ApiClient`] instances with configuration
//! - `auth`: Login, logout, and profile operations
//! - `products`: Product CRUD and availability views
//! - `categories`: Category CRUD
//! - `borrowings`: Borrow lifecycle, status transitions, return submission
//! - `users`: User management (admin)
//! - `activity`: Audit-trail queries
//! - `reports`: Report preview and PDF download
//! - `stats`: Dashboard statistics
//!
//! ## Design Principles
//!
//! 1. **Validate Before Sending**: Parameter validation runs locally; a
//!    request that cannot succeed never leaves the machine
//! 2. **Session Hygiene**: Any 401 clears the stored session before the
//!    error is surfaced
//! 3. **Envelope Normalization**: Both wrapped and bare response shapes
//!    decode through [`crate::envelope::ApiEnvelope`]
//! 4. **No Optimistic State**: Mutations return what the backend confirmed

mod activity;
mod auth;
mod borrowings;
mod builder;
mod categories;
mod products;
mod reports;
mod stats;
mod users;

pub use builder::ClientBuilder;
pub use reports::ReportDownload;

use log::debug;
use serde::de::DeserializeOwned;

use crate::envelope::ApiEnvelope;
use crate::error::{error_for_status, ApiError, Result};
use crate::guard::{check_access, Access, Route};
use crate::models::User;
use crate::session::{Session, SessionStore};

/// Client for the inventory borrowing backend.
///
/// Cheap to clone would be nice but sessions are file-backed, so the client
/// is used by reference instead. Create via [`ClientBuilder`].
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    sessions: SessionStore,
}

impl ApiClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, sessions: SessionStore) -> Self {
        ApiClient {
            http,
            base_url,
            sessions,
        }
    }

    /// Base URL the client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store backing this client.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// The currently logged-in user, if any.
    pub fn current_user(&self) -> Result<Option<User>> {
        Ok(self.sessions.current()?.map(|s| s.user))
    }

    /// Full URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Loads the session or fails without touching the network.
    pub(crate) fn require_session(&self) -> Result<Session> {
        self.sessions.current()?.ok_or_else(|| {
            ApiError::unauthorized("Belum login. Jalankan 'inv login' terlebih dahulu")
        })
    }

    /// Loads the session and checks the role against a route's access rule.
    pub(crate) fn require_route(&self, route: Route) -> Result<Session> {
        let session = self.require_session()?;
        match check_access(session.user.role, route) {
            Access::Allow => Ok(session),
            Access::Redirect(_) => Err(ApiError::Forbidden {
                role: session.user.role.as_str().to_string(),
                reason: "Operasi ini hanya untuk admin".to_string(),
            }),
        }
    }

    /// Sends an authenticated request and decodes the enveloped payload.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        token: &str,
    ) -> Result<T> {
        let response = request.bearer_auth(token).send().await?;
        self.decode(response).await
    }

    /// Decodes a response, mapping error statuses to the error taxonomy.
    ///
    /// A 401 response clears the stored session before the error is
    /// returned, so a stale token cannot wedge every subsequent command.
    pub(crate) async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());
        if !status.is_success() {
            return Err(self.error_from(status.as_u16(), response).await);
        }
        let bytes = response.bytes().await?;
        let envelope: ApiEnvelope<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::decode(format!("response body: {e}")))?;
        Ok(envelope.into_data())
    }

    /// Checks a response for success without decoding a payload.
    pub(crate) async fn expect_success(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());
        if !status.is_success() {
            return Err(self.error_from(status.as_u16(), response).await);
        }
        Ok(())
    }

    /// Builds an [`ApiError`] from an error response, pulling the backend's
    /// own message out of the body when one exists.
    async fn error_from(&self, status: u16, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        if status == 401 {
            // The token is dead; forget it.
            if let Err(e) = self.sessions.clear() {
                debug!("Failed to clear session after 401: {e}");
            }
        }
        error_for_status(status, message)
    }
}

/// Pulls a human-readable message out of an error body.
///
/// The backend answers with `{"message": …}` or `{"pesan": …}` depending on
/// the endpoint's vintage; anything else is passed through as raw text.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "pesan", "error"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    body.trim().to_string()
}

/// Guesses the MIME type of a photo from its file extension.
///
/// Only called after [`crate::params::validate_photo`] has accepted the
/// extension, so the fallback arm is never the interesting case.
pub(crate) fn photo_mime(path: &std::path::Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Reads a photo from disk into a multipart part.
pub(crate) fn photo_part(path: &std::path::Path) -> Result<reqwest::multipart::Part> {
    let bytes = std::fs::read(path).map_err(|source| ApiError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("foto.jpg")
        .to_string();
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime(path))
        .map_err(|e| ApiError::decode(format!("photo part: {e}")))?;
    Ok(part)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_extract_message_shapes() {
        assert_eq!(
            extract_message(r#"{"message": "Token kadaluarsa"}"#),
            "Token kadaluarsa"
        );
        assert_eq!(
            extract_message(r#"{"pesan": "Produk tidak ditemukan"}"#),
            "Produk tidak ditemukan"
        );
        assert_eq!(extract_message("Internal Server Error\n"), "Internal Server Error");
        assert_eq!(extract_message(r#"{"other": 1}"#), r#"{"other": 1}"#);
    }

    #[test]
    fn test_photo_mime_by_extension() {
        assert_eq!(photo_mime(Path::new("bukti.JPG")), "image/jpeg");
        assert_eq!(photo_mime(Path::new("bukti.webp")), "image/webp");
        assert_eq!(photo_mime(Path::new("bukti.png")), "image/png");
    }

    #[test]
    fn test_require_session_fails_offline() {
        let dir = tempfile::tempdir().unwrap();
        let client = ClientBuilder::new()
            .with_session_path(dir.path().join("session.json"))
            .build()
            .unwrap();
        let err = client.require_session().unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(err.to_string().contains("inv login"));
    }

    #[tokio::test]
    async fn test_unauthorized_response_clears_stored_session() {
        use crate::models::{Role, User};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(path.clone());
        store
            .save(&Session {
                token: "basi".to_string(),
                user: User {
                    id: 1,
                    name: "Budi".to_string(),
                    email: "budi@kantor.id".to_string(),
                    role: Role::Pengguna,
                },
            })
            .unwrap();

        let client = ClientBuilder::new()
            .with_session_path(path.clone())
            .build()
            .unwrap();
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(401)
                .body(r#"{"message": "Token tidak valid"}"#.to_string())
                .unwrap(),
        );
        let err = client
            .decode::<serde_json::Value>(response)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(err.to_string().contains("Token tidak valid"));
        assert!(!path.exists());
        assert!(client.current_user().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_401_error_keeps_stored_session() {
        use crate::models::{Role, User};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(path.clone());
        store
            .save(&Session {
                token: "tok".to_string(),
                user: User {
                    id: 1,
                    name: "Budi".to_string(),
                    email: "budi@kantor.id".to_string(),
                    role: Role::Admin,
                },
            })
            .unwrap();

        let client = ClientBuilder::new()
            .with_session_path(path.clone())
            .build()
            .unwrap();
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(500)
                .body("Internal Server Error".to_string())
                .unwrap(),
        );
        let err = client
            .decode::<serde_json::Value>(response)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert!(path.exists());
    }

    #[test]
    fn test_require_route_rejects_non_admin() {
        use crate::models::{Role, User};
        use crate::session::Session;

        let dir = tempfile::tempdir().unwrap();
        let store = crate::session::SessionStore::new(dir.path().join("session.json"));
        store
            .save(&Session {
                token: "tok".to_string(),
                user: User {
                    id: 2,
                    name: "Sari".to_string(),
                    email: "sari@kantor.id".to_string(),
                    role: Role::Pengguna,
                },
            })
            .unwrap();

        let client = ClientBuilder::new()
            .with_session_path(dir.path().join("session.json"))
            .build()
            .unwrap();
        assert!(client.require_route(Route::UserHistory).is_ok());
        let err = client.require_route(Route::AdminUsers).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { .. }));
    }
}
