//! Response envelope normalization.
//!
//! The backend is inconsistent about its response shape: newer endpoints
//! wrap payloads in `{success, message, data, pagination}` while older ones
//! return the payload bare. Decoding goes through [`ApiEnvelope`] so callers
//! only ever see the payload.

use serde::Deserialize;

/// Pagination metadata, present on some wrapped list responses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-indexed
    #[serde(rename = "halaman", alias = "page", default)]
    pub page: u32,
    /// Total number of rows across all pages
    #[serde(rename = "total", default)]
    pub total: u64,
    /// Rows per page
    #[serde(rename = "per_halaman", alias = "per_page", default)]
    pub per_page: u32,
}

/// Either a wrapped `{success, message, data}` response or a bare payload.
///
/// Untagged: serde tries the wrapped shape first, so a bare payload that
/// happens to contain a `data` key must also carry `success` to be treated
/// as wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    /// The newer wrapped shape
    Wrapped {
        success: bool,
        #[serde(default)]
        message: Option<String>,
        data: T,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    /// The older bare shape
    Bare(T),
}

impl<T> ApiEnvelope<T> {
    /// Unwraps to the payload, discarding envelope metadata.
    pub fn into_data(self) -> T {
        match self {
            ApiEnvelope::Wrapped { data, .. } => data,
            ApiEnvelope::Bare(data) => data,
        }
    }

    /// The backend's message, when the wrapped shape carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiEnvelope::Wrapped { message, .. } => message.as_deref(),
            ApiEnvelope::Bare(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Category;

    use super::*;

    #[test]
    fn test_wrapped_shape_unwraps_data() {
        let json = r#"{
            "success": true,
            "message": "Berhasil mengambil data",
            "data": [{"id": 1, "nama": "Elektronik"}],
            "pagination": {"halaman": 1, "total": 1, "per_halaman": 10}
        }"#;
        let envelope: ApiEnvelope<Vec<Category>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.message(), Some("Berhasil mengambil data"));
        let categories = envelope.into_data();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Elektronik");
    }

    #[test]
    fn test_bare_shape_decodes_directly() {
        let json = r#"[{"id": 2, "nama": "Furnitur"}]"#;
        let envelope: ApiEnvelope<Vec<Category>> = serde_json::from_str(json).unwrap();
        assert!(envelope.message().is_none());
        let categories = envelope.into_data();
        assert_eq!(categories[0].name, "Furnitur");
    }

    #[test]
    fn test_wrapped_without_optional_fields() {
        let json = r#"{"success": true, "data": {"id": 3, "nama": "Alat Tulis"}}"#;
        let envelope: ApiEnvelope<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data().name, "Alat Tulis");
    }
}
