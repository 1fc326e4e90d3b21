//! Status enumerations for borrowings, item condition, and user roles.
//!
//! [`BorrowStatus`] is the single source of truth for the borrowing status
//! union. The backend historically emitted a mix of English and Indonesian
//! spellings (`borrowed`/`dipinjam`, `returned`/`dikembalikan`); parsing
//! accepts every observed spelling while serialization always emits the
//! canonical one.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of borrowing statuses.
///
/// Lifecycle: `Pending → Approved → Borrowed → PendingReturn → Returned`,
/// with `Rejected` as an alternate terminal reachable only from `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BorrowStatus {
    /// Request submitted, waiting for an admin decision
    #[default]
    #[serde(rename = "pending", alias = "menunggu")]
    Pending,

    /// Approved by an admin, waiting for physical hand-off
    #[serde(rename = "approved", alias = "disetujui")]
    Approved,

    /// Item is physically out with the borrower
    #[serde(rename = "dipinjam", alias = "borrowed")]
    Borrowed,

    /// Borrower submitted a return with photo evidence; stock stays reserved
    /// until an admin verifies the return
    #[serde(rename = "pending_return", alias = "menunggu_verifikasi")]
    PendingReturn,

    /// Return verified by an admin; stock released (terminal)
    #[serde(rename = "dikembalikan", alias = "returned")]
    Returned,

    /// Rejected by an admin (terminal)
    #[serde(rename = "ditolak", alias = "rejected")]
    Rejected,
}

impl FromStr for BorrowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" | "menunggu" => Ok(BorrowStatus::Pending),
            "approved" | "disetujui" => Ok(BorrowStatus::Approved),
            "dipinjam" | "borrowed" => Ok(BorrowStatus::Borrowed),
            "pending_return" | "menunggu_verifikasi" => Ok(BorrowStatus::PendingReturn),
            "dikembalikan" | "returned" => Ok(BorrowStatus::Returned),
            "ditolak" | "rejected" => Ok(BorrowStatus::Rejected),
            _ => Err(format!("Invalid borrowing status: {s}")),
        }
    }
}

impl BorrowStatus {
    /// Canonical wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Pending => "pending",
            BorrowStatus::Approved => "approved",
            BorrowStatus::Borrowed => "dipinjam",
            BorrowStatus::PendingReturn => "pending_return",
            BorrowStatus::Returned => "dikembalikan",
            BorrowStatus::Rejected => "ditolak",
        }
    }

    /// Human-readable Indonesian label, matching the labels the backend's
    /// own admin screens use.
    pub fn label(&self) -> &'static str {
        match self {
            BorrowStatus::Pending => "Menunggu Persetujuan",
            BorrowStatus::Approved => "Disetujui",
            BorrowStatus::Borrowed => "Dipinjam",
            BorrowStatus::PendingReturn => "Menunggu Verifikasi",
            BorrowStatus::Returned => "Dikembalikan",
            BorrowStatus::Rejected => "Ditolak",
        }
    }

    /// Whether the item is physically out under this status.
    ///
    /// `PendingReturn` still counts: a return awaiting verification has not
    /// released the stock yet, and the availability calculator must keep
    /// treating it as an active loan.
    pub fn is_active_loan(&self) -> bool {
        matches!(self, BorrowStatus::Borrowed | BorrowStatus::PendingReturn)
    }

    /// Whether this status ends the lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BorrowStatus::Returned | BorrowStatus::Rejected)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    ///
    /// The client enforces this before issuing a status mutation so that a
    /// stale screen cannot, for example, approve an already-returned request.
    pub fn can_transition_to(&self, next: BorrowStatus) -> bool {
        use BorrowStatus::*;
        matches!(
            (self, next),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, Borrowed)
                | (Borrowed, PendingReturn)
                | (PendingReturn, Returned)
        )
    }
}

/// Physical condition of an item, recorded at loan and again at return.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ItemCondition {
    /// Good condition
    #[default]
    #[serde(rename = "Baik", alias = "baik")]
    Baik,
    /// Lightly damaged
    #[serde(rename = "Rusak Ringan", alias = "rusak ringan", alias = "rusak_ringan")]
    RusakRingan,
    /// Heavily damaged
    #[serde(rename = "Rusak Berat", alias = "rusak berat", alias = "rusak_berat")]
    RusakBerat,
    /// Lost
    #[serde(rename = "Hilang", alias = "hilang")]
    Hilang,
}

impl FromStr for ItemCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baik" => Ok(ItemCondition::Baik),
            "rusak ringan" | "rusak_ringan" | "rusak-ringan" => Ok(ItemCondition::RusakRingan),
            "rusak berat" | "rusak_berat" | "rusak-berat" => Ok(ItemCondition::RusakBerat),
            "hilang" => Ok(ItemCondition::Hilang),
            _ => Err(format!("Invalid item condition: {s}")),
        }
    }
}

impl ItemCondition {
    /// Wire and display representation (the backend stores the label itself).
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::Baik => "Baik",
            ItemCondition::RusakRingan => "Rusak Ringan",
            ItemCondition::RusakBerat => "Rusak Berat",
            ItemCondition::Hilang => "Hilang",
        }
    }
}

/// User role, gating which routes and operations are permitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    /// Full management access
    #[serde(rename = "admin", alias = "Admin", alias = "ADMIN")]
    Admin,
    /// Regular borrower
    #[default]
    #[serde(rename = "pengguna", alias = "user", alias = "Pengguna", alias = "User")]
    Pengguna,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "pengguna" | "user" => Ok(Role::Pengguna),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// Canonical wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Pengguna => "pengguna",
        }
    }
}
