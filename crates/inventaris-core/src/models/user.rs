//! User model definition.

use serde::{Deserialize, Serialize};

use super::Role;

/// A registered user of the borrowing system.
///
/// Credentials are opaque to the client; the backend never returns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: u64,

    /// Display name
    #[serde(rename = "nama_pengguna", alias = "nama")]
    pub name: String,

    /// Login email
    pub email: String,

    /// Role, case-normalized during deserialization via [`Role`]'s aliases
    #[serde(rename = "peran", default)]
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_case_normalized() {
        let json = r#"{"id": 1, "nama_pengguna": "Budi", "email": "budi@kantor.id", "peran": "ADMIN"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_user_role_defaults_to_pengguna() {
        let json = r#"{"id": 2, "nama_pengguna": "Sari", "email": "sari@kantor.id"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Pengguna);
    }
}
