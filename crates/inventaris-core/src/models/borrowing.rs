//! Borrowing model definition and derived-label helpers.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{BorrowStatus, ItemCondition};

/// A borrow request and its lifecycle state.
///
/// Created by a user, mutated by admin decisions and the two-step return
/// flow, never deleted in the normal flow. Status changes are confirmed by
/// the backend; the client never advances `status` optimistically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Borrowing {
    /// Unique identifier for the borrowing
    pub id: u64,

    /// Borrowed product
    #[serde(rename = "produk_id", alias = "id_produk")]
    pub product_id: u64,

    /// Denormalized product name, when the backend joins it in
    #[serde(
        rename = "nama_produk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_name: Option<String>,

    /// Borrower
    #[serde(rename = "pengguna_id", default)]
    pub user_id: Option<u64>,

    /// Denormalized borrower name
    #[serde(
        rename = "nama_pengguna",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,

    /// Requested quantity; legacy records omit it and mean a single unit
    #[serde(rename = "jumlah_dipinjam", default = "default_quantity")]
    pub quantity: u32,

    /// Business date the loan started
    #[serde(rename = "tanggal_pinjam", default)]
    pub borrow_date: Option<Date>,

    /// Planned return date agreed at request time
    #[serde(rename = "tanggal_kembali_rencana", default)]
    pub planned_return_date: Option<Date>,

    /// Actual return date, set once the return is verified
    #[serde(rename = "tanggal_kembali_aktual", default)]
    pub actual_return_date: Option<Date>,

    /// Stated purpose of the loan
    #[serde(rename = "keperluan", default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Condition recorded at hand-off
    #[serde(rename = "kondisi_pinjam", default)]
    pub condition_at_loan: Option<ItemCondition>,

    /// Condition reported in the return submission
    #[serde(rename = "kondisi_kembali", default)]
    pub condition_at_return: Option<ItemCondition>,

    /// Backend reference to the uploaded return photo
    #[serde(
        rename = "foto_kembali",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub return_photo: Option<String>,

    /// Free-text note left by the admin handling the request
    #[serde(
        rename = "catatan_admin",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub admin_note: Option<String>,

    /// Current lifecycle status
    #[serde(default)]
    pub status: BorrowStatus,

    /// Timestamp when the record was created (backend audit field)
    #[serde(
        rename = "created_at",
        alias = "dibuat_pada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

fn default_quantity() -> u32 {
    1
}

impl Borrowing {
    /// Whether the loan is past its planned return date.
    ///
    /// Presentation-only: `overdue` is never a stored status. A borrowing
    /// stops being overdue the moment it reaches a terminal state, and a
    /// record without a planned date can never be overdue. `today` is
    /// injected so callers (and tests) control the clock.
    pub fn is_overdue(&self, today: Date) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.planned_return_date {
            Some(planned) => planned < today,
            None => false,
        }
    }

    /// Days until the planned return date (negative once overdue).
    pub fn days_remaining(&self, today: Date) -> Option<i32> {
        self.planned_return_date
            .map(|planned| (planned - today).get_days())
    }
}
