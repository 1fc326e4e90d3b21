//! Activity log model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single audit-trail entry recorded by the backend.
///
/// The log is append-only; the client only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier for the entry
    pub id: u64,

    /// Human-readable description of what happened
    #[serde(rename = "deskripsi", alias = "aksi")]
    pub description: String,

    /// Name of the user who performed the action
    #[serde(
        rename = "nama_pengguna",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,

    /// Table the action touched, when the backend records one
    #[serde(rename = "tabel", default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    /// Identifier of the touched row within `table`
    #[serde(rename = "id_baris", default, skip_serializing_if = "Option::is_none")]
    pub row_id: Option<u64>,

    /// Timestamp when the entry was recorded
    #[serde(
        rename = "created_at",
        alias = "dibuat_pada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_decodes_wire_payload() {
        let json = r#"{
            "id": 41,
            "deskripsi": "Menyetujui peminjaman #12",
            "nama_pengguna": "Budi",
            "tabel": "peminjaman",
            "id_baris": 12
        }"#;
        let entry: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(entry.description, "Menyetujui peminjaman #12");
        assert_eq!(entry.table.as_deref(), Some("peminjaman"));
        assert_eq!(entry.row_id, Some(12));
    }
}
