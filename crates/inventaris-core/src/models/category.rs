//! Category model definition.

use serde::{Deserialize, Serialize};

/// A product category (many products to one category).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique identifier for the category
    pub id: u64,

    /// Display name
    #[serde(rename = "nama")]
    pub name: String,

    /// Optional free-text description
    #[serde(rename = "deskripsi", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
