//! Error types for the Inventaris client library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all client operations.
///
/// Variants mirror the failure taxonomy of the backend: local validation
/// failures never reach the network, authentication failures invalidate the
/// stored session, and server-side failures carry the backend's own message
/// where one exists.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client-side validation errors, raised before any request is issued
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// The session is missing, expired, or was rejected by the backend (401).
    /// The stored session has already been cleared when this is returned.
    #[error("Session expired or not logged in: {message}")]
    Unauthorized { message: String },
    /// The current role is not allowed to perform the operation
    #[error("Access denied for role '{role}': {reason}")]
    Forbidden { role: String, reason: String },
    /// Resource not found (404); the backend message already reads as a
    /// full sentence ("Produk tidak ditemukan") and is shown as-is
    #[error("{message}")]
    NotFound { message: String },
    /// The uploaded payload exceeded the backend's size ceiling (413)
    #[error("Upload rejected by server: payload too large")]
    PayloadTooLarge,
    /// The uploaded file type was rejected by the backend (415)
    #[error("Upload rejected by server: unsupported media type")]
    UnsupportedMedia,
    /// Server-side validation failure (400); the backend message is shown
    /// verbatim
    #[error("Request rejected: {message}")]
    Rejected { message: String },
    /// Server or infrastructure errors (5xx and unexpected statuses)
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },
    /// Transport-level failure before a response was received
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },
    /// Response body did not match the expected shape
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
    /// File system operation errors (session file, photo attachment)
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Client configuration errors (bad base URL, unusable session path)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ApiError {
    /// Creates a validation error for a named field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unauthorized error with the given message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a decode error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
        }
    }

    /// Whether the error came from the backend rejecting the request, as
    /// opposed to a local validation or transport failure.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. }
                | ApiError::NotFound { .. }
                | ApiError::PayloadTooLarge
                | ApiError::UnsupportedMedia
                | ApiError::Rejected { .. }
                | ApiError::Server { .. }
        )
    }
}

/// Maps an HTTP error status to the client error taxonomy.
///
/// Pure over its inputs so the mapping can be tested without a live backend.
/// `401` intentionally maps to [`ApiError::Unauthorized`]; the caller is
/// responsible for clearing the stored session before surfacing it.
pub fn error_for_status(status: u16, message: String) -> ApiError {
    match status {
        400 => ApiError::Rejected { message },
        401 => ApiError::Unauthorized { message },
        404 => ApiError::NotFound {
            message: if message.is_empty() {
                "Data tidak ditemukan".to_string()
            } else {
                message
            },
        },
        413 => ApiError::PayloadTooLarge,
        415 => ApiError::UnsupportedMedia,
        status => ApiError::Server { status, message },
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_maps_taxonomy() {
        assert!(matches!(
            error_for_status(400, "field wajib".into()),
            ApiError::Rejected { .. }
        ));
        assert!(matches!(
            error_for_status(401, "token kadaluarsa".into()),
            ApiError::Unauthorized { .. }
        ));
        assert!(matches!(
            error_for_status(404, "Produk".into()),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            error_for_status(404, String::new()),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            error_for_status(413, String::new()),
            ApiError::PayloadTooLarge
        ));
        assert!(matches!(
            error_for_status(415, String::new()),
            ApiError::UnsupportedMedia
        ));
        assert!(matches!(
            error_for_status(500, "oops".into()),
            ApiError::Server { status: 500, .. }
        ));
        assert!(matches!(
            error_for_status(503, String::new()),
            ApiError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_rejected_message_shown_verbatim() {
        let err = error_for_status(400, "jumlah_dipinjam melebihi stok".into());
        assert_eq!(
            err.to_string(),
            "Request rejected: jumlah_dipinjam melebihi stok"
        );
    }

    #[test]
    fn test_not_found_shows_backend_message_unmangled() {
        let err = error_for_status(404, "Produk tidak ditemukan".into());
        assert_eq!(err.to_string(), "Produk tidak ditemukan");

        let err = error_for_status(404, String::new());
        assert_eq!(err.to_string(), "Data tidak ditemukan");
    }

    #[test]
    fn test_is_server_side() {
        assert!(error_for_status(500, String::new()).is_server_side());
        assert!(error_for_status(401, String::new()).is_server_side());
        assert!(!ApiError::validation("foto", "missing").is_server_side());
    }
}
