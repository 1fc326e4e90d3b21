//! Product model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A loanable inventory item as the backend reports it.
///
/// Field names follow the backend's Indonesian wire names; `jumlah_stok` is
/// the TOTAL stock, not the currently-available stock — the derived view
/// lives in [`crate::availability::ProductAvailability`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub id: u64,

    /// Display name
    #[serde(rename = "nama")]
    pub name: String,

    /// Optional free-text description
    #[serde(rename = "deskripsi", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Referenced category
    #[serde(rename = "kategori_id", default)]
    pub category_id: Option<u64>,

    /// Denormalized category name, when the backend joins it in
    #[serde(
        rename = "nama_kategori",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_name: Option<String>,

    /// Total stock quantity owned, regardless of active loans
    #[serde(rename = "jumlah_stok", alias = "stok", default)]
    pub total_stock: u32,

    /// Minimum-stock threshold below which availability is flagged as limited
    #[serde(rename = "stok_minimum", default = "default_minimum_stock")]
    pub minimum_stock: u32,

    /// Optional photo reference (backend-managed path or URL)
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    /// Timestamp when the record was created (backend audit field)
    #[serde(
        rename = "created_at",
        alias = "dibuat_pada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,

    /// Timestamp when the record was last modified (backend audit field)
    #[serde(
        rename = "updated_at",
        alias = "diperbarui_pada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<Timestamp>,
}

fn default_minimum_stock() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_wire_names() {
        let json = r#"{
            "id": 3,
            "nama": "Proyektor Epson",
            "nama_kategori": "Elektronik",
            "jumlah_stok": 3,
            "stok_minimum": 1,
            "kategori_id": 1
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Proyektor Epson");
        assert_eq!(product.total_stock, 3);
        assert_eq!(product.minimum_stock, 1);
        assert_eq!(product.category_name.as_deref(), Some("Elektronik"));
    }

    #[test]
    fn test_product_legacy_stock_alias_and_defaults() {
        // Older payloads used "stok" and omitted the threshold entirely.
        let json = r#"{"id": 1, "nama": "Kabel HDMI", "stok": 10}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.total_stock, 10);
        assert_eq!(product.minimum_stock, 1);
        assert!(product.photo.is_none());
    }
}
