//! Borrow lifecycle operations: requests, status transitions, returns.

use jiff::Zoned;
use serde_json::json;

use super::{photo_part, ApiClient};
use crate::error::{ApiError, Result};
use crate::guard::Route;
use crate::models::{BorrowStatus, Borrowing};
use crate::params::{CreateBorrowing, ExtendBorrowing, ListBorrowings, ReturnSubmission};

impl ApiClient {
    /// Lists borrowings, applying the given filters.
    ///
    /// Status and product filters are sent to the backend; the overdue
    /// filter is applied client-side because `overdue` is a derived label,
    /// not a status the backend stores.
    pub async fn list_borrowings(&self, filters: &ListBorrowings) -> Result<Vec<Borrowing>> {
        let session = self.require_session()?;
        let mut request = self.http.get(self.url("/api/peminjaman"));
        if let Some(status) = filters.status {
            request = request.query(&[("status", status.as_str())]);
        }
        if let Some(product_id) = filters.product_id {
            request = request.query(&[("produk_id", product_id)]);
        }
        let mut borrowings: Vec<Borrowing> = self.send(request, &session.token).await?;
        if filters.overdue {
            let today = Zoned::now().date();
            borrowings.retain(|b| b.is_overdue(today));
        }
        Ok(borrowings)
    }

    /// Fetches a single borrowing by ID.
    pub async fn get_borrowing(&self, id: u64) -> Result<Borrowing> {
        let session = self.require_session()?;
        let request = self.http.get(self.url(&format!("/api/peminjaman/{id}")));
        self.send(request, &session.token).await
    }

    /// Submits a new borrow request.
    ///
    /// The requested quantity is checked against the locally derived
    /// availability first; the backend revalidates and its answer wins.
    pub async fn create_borrowing(&self, params: &CreateBorrowing) -> Result<Borrowing> {
        let availability = self.product_availability(params.product_id).await?;
        params.validate_against_available(availability.available)?;
        let session = self.require_session()?;
        let request = self.http.post(self.url("/api/peminjaman")).json(&json!({
            "produk_id": params.product_id,
            "jumlah_dipinjam": params.quantity.unwrap_or(1),
            "tanggal_pinjam": params.borrow_date,
            "tanggal_kembali_rencana": params.planned_return_date,
            "keperluan": params.purpose,
        }));
        self.send(request, &session.token).await
    }

    /// Moves a borrowing to a new status (admin only).
    ///
    /// The transition is checked against the current record first so a
    /// stale listing cannot, say, approve an already-returned request.
    pub async fn set_borrowing_status(
        &self,
        id: u64,
        next: BorrowStatus,
        note: Option<&str>,
    ) -> Result<Borrowing> {
        let session = self.require_route(Route::AdminBorrowings)?;
        let current = self.get_borrowing(id).await?;
        if !current.status.can_transition_to(next) {
            return Err(ApiError::validation(
                "status",
                format!(
                    "Tidak dapat mengubah status dari '{}' ke '{}'",
                    current.status.label(),
                    next.label()
                ),
            ));
        }
        let request = self
            .http
            .put(self.url(&format!("/api/peminjaman/{id}/status")))
            .json(&json!({
                "status": next.as_str(),
                "catatan_admin": note,
            }));
        self.send(request, &session.token).await
    }

    /// Approves a pending request (admin only).
    pub async fn approve_borrowing(&self, id: u64, note: Option<&str>) -> Result<Borrowing> {
        self.set_borrowing_status(id, BorrowStatus::Approved, note)
            .await
    }

    /// Rejects a pending request (admin only).
    pub async fn reject_borrowing(&self, id: u64, note: Option<&str>) -> Result<Borrowing> {
        self.set_borrowing_status(id, BorrowStatus::Rejected, note)
            .await
    }

    /// Records the physical hand-off of an approved request (admin only).
    pub async fn hand_over_borrowing(&self, id: u64) -> Result<Borrowing> {
        self.set_borrowing_status(id, BorrowStatus::Borrowed, None)
            .await
    }

    /// Verifies a submitted return, releasing the stock (admin only).
    pub async fn confirm_return(&self, id: u64, note: Option<&str>) -> Result<Borrowing> {
        self.set_borrowing_status(id, BorrowStatus::Returned, note)
            .await
    }

    /// Extends an active loan's planned return date.
    ///
    /// The extension is checked against the current record first: only a
    /// loan that is out with the borrower can be extended, and only to a
    /// later date than currently planned. The backend revalidates.
    pub async fn extend_borrowing(&self, params: &ExtendBorrowing) -> Result<Borrowing> {
        let session = self.require_session()?;
        let current = self.get_borrowing(params.borrowing_id).await?;
        let new_date = params.validate_against_current(&current)?;
        let request = self
            .http
            .post(self.url(&format!(
                "/api/peminjaman/{}/perpanjang",
                params.borrowing_id
            )))
            .json(&json!({
                "tanggal_kembali_rencana": new_date,
                "alasan": params.reason,
            }));
        self.send(request, &session.token).await
    }

    /// Submits a return with photo evidence.
    ///
    /// Moves the borrowing to the verification queue; stock stays reserved
    /// until an admin confirms. The photo is validated locally before any
    /// bytes are uploaded.
    pub async fn submit_return(&self, params: &ReturnSubmission) -> Result<Borrowing> {
        let (condition, photo) = params.validate()?;
        let session = self.require_session()?;
        let mut form = reqwest::multipart::Form::new()
            .text("kondisi_kembali", condition.as_str())
            .part("foto", photo_part(photo)?);
        if let Some(note) = &params.note {
            form = form.text("catatan", note.clone());
        }
        let request = self
            .http
            .put(self.url(&format!(
                "/api/peminjaman/{}/kembalikan",
                params.borrowing_id
            )))
            .multipart(form);
        self.send(request, &session.token).await
    }

    /// Lists overdue borrowings from the backend's admin view (admin only).
    pub async fn list_overdue_borrowings(&self) -> Result<Vec<Borrowing>> {
        let session = self.require_route(Route::AdminBorrowings)?;
        let request = self.http.get(self.url("/api/peminjaman/admin/terlambat"));
        self.send(request, &session.token).await
    }

    /// Lists the authenticated user's own borrowing history.
    pub async fn my_borrowing_history(&self) -> Result<Vec<Borrowing>> {
        let session = self.require_session()?;
        let request = self.http.get(self.url("/api/peminjaman/user/riwayat"));
        self.send(request, &session.token).await
    }
}
