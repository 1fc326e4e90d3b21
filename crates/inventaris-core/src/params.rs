//! Parameter structures for Inventaris operations.
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, others later) without framework-specific
//! derives. Interface layers wrap these with their own derives (clap, etc.)
//! and convert via `From` impls, so validation lives in exactly one place
//! and runs before any request leaves the machine.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::models::{BorrowStatus, Borrowing, ItemCondition, Role};

/// Maximum accepted size for an uploaded photo, in bytes.
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// File extensions accepted as photo uploads.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Login credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email
    pub email: String,
    /// Password, sent as `kata_sandi` on the wire
    #[serde(rename = "kata_sandi")]
    pub password: String,
}

impl Credentials {
    /// Checks that both fields are non-empty before hitting the network.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(ApiError::validation("email", "Email wajib diisi"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("kata_sandi", "Kata sandi wajib diisi"));
        }
        Ok(())
    }
}

/// Parameters for creating a new product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Display name (required)
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Category to file the product under
    pub category_id: Option<u64>,
    /// Total stock quantity owned
    pub total_stock: u32,
    /// Minimum-stock threshold; defaults to 1 when omitted
    pub minimum_stock: Option<u32>,
    /// Optional photo to upload alongside the record
    pub photo: Option<PathBuf>,
}

impl CreateProduct {
    /// Validates the name and, when present, the photo attachment.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("nama", "Nama produk wajib diisi"));
        }
        if let Some(path) = &self.photo {
            validate_photo(path)?;
        }
        Ok(())
    }
}

/// Parameters for updating an existing product.
///
/// All fields are optional; omitted fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// Product ID to update (required)
    pub id: u64,
    /// Updated display name
    pub name: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated category
    pub category_id: Option<u64>,
    /// Updated total stock
    pub total_stock: Option<u32>,
    /// Updated minimum-stock threshold
    pub minimum_stock: Option<u32>,
    /// Replacement photo to upload
    pub photo: Option<PathBuf>,
}

impl UpdateProduct {
    /// Rejects a no-op update and validates the photo when present.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.total_stock.is_none()
            && self.minimum_stock.is_none()
            && self.photo.is_none()
        {
            return Err(ApiError::validation(
                "update",
                "Tidak ada perubahan yang diberikan",
            ));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ApiError::validation("nama", "Nama produk wajib diisi"));
            }
        }
        if let Some(path) = &self.photo {
            validate_photo(path)?;
        }
        Ok(())
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Display name (required)
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
}

impl CreateCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("nama", "Nama kategori wajib diisi"));
        }
        Ok(())
    }
}

/// Parameters for updating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// Category ID to update (required)
    pub id: u64,
    /// Updated display name
    pub name: Option<String>,
    /// Updated description
    pub description: Option<String>,
}

impl UpdateCategory {
    /// Rejects a no-op update and a blank replacement name.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_none() && self.description.is_none() {
            return Err(ApiError::validation(
                "update",
                "Tidak ada perubahan yang diberikan",
            ));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ApiError::validation("nama", "Nama kategori wajib diisi"));
            }
        }
        Ok(())
    }
}

/// Parameters for submitting a new borrow request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBorrowing {
    /// Product to borrow
    pub product_id: u64,
    /// Requested quantity; the backend treats a missing quantity as 1
    pub quantity: Option<u32>,
    /// Business date the loan should start
    pub borrow_date: Option<Date>,
    /// Planned return date (required)
    pub planned_return_date: Option<Date>,
    /// Stated purpose of the loan
    pub purpose: Option<String>,
}

impl CreateBorrowing {
    /// Validates dates and quantity; `available` is the locally derived
    /// availability figure, checked so an obviously doomed request is
    /// rejected without a round trip. The backend revalidates regardless.
    pub fn validate_against_available(&self, available: u32) -> Result<()> {
        let quantity = self.quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(ApiError::validation(
                "jumlah_dipinjam",
                "Jumlah pinjam minimal 1",
            ));
        }
        if quantity > available {
            return Err(ApiError::validation(
                "jumlah_dipinjam",
                format!("Jumlah pinjam melebihi stok tersedia ({available})"),
            ));
        }
        let planned = self.planned_return_date.ok_or_else(|| {
            ApiError::validation("tanggal_kembali_rencana", "Tanggal kembali wajib diisi")
        })?;
        if let Some(start) = self.borrow_date {
            if planned < start {
                return Err(ApiError::validation(
                    "tanggal_kembali_rencana",
                    "Tanggal kembali tidak boleh sebelum tanggal pinjam",
                ));
            }
        }
        Ok(())
    }
}

/// Parameters for extending a loan's planned return date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtendBorrowing {
    /// Borrowing to extend
    pub borrowing_id: u64,
    /// New planned return date (required)
    pub new_return_date: Option<Date>,
    /// Stated reason for the extension
    pub reason: Option<String>,
}

impl ExtendBorrowing {
    /// Validates the extension against the current record, returning the
    /// new date on success. Only a loan that is out with the borrower can
    /// be extended, and only to a later date than currently planned.
    pub fn validate_against_current(&self, current: &Borrowing) -> Result<Date> {
        let new_date = self.new_return_date.ok_or_else(|| {
            ApiError::validation(
                "tanggal_kembali_rencana",
                "Tanggal kembali baru wajib diisi",
            )
        })?;
        if !matches!(current.status, BorrowStatus::Borrowed) {
            return Err(ApiError::validation(
                "status",
                format!(
                    "Peminjaman berstatus '{}' tidak dapat diperpanjang",
                    current.status.label()
                ),
            ));
        }
        if let Some(planned) = current.planned_return_date {
            if new_date <= planned {
                return Err(ApiError::validation(
                    "tanggal_kembali_rencana",
                    "Tanggal kembali baru harus setelah rencana saat ini",
                ));
            }
        }
        Ok(new_date)
    }
}

/// Parameters for a borrower's return submission.
///
/// The photo is mandatory evidence; the submission never reaches the
/// network unless the file exists, looks like an image, and fits under
/// [`MAX_PHOTO_BYTES`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnSubmission {
    /// Borrowing being returned
    pub borrowing_id: u64,
    /// Condition of the item at return (required)
    pub condition: Option<ItemCondition>,
    /// Optional free-text note
    pub note: Option<String>,
    /// Path to the photo evidence (required)
    pub photo: Option<PathBuf>,
}

impl ReturnSubmission {
    /// Validates the submission, returning the resolved condition and photo
    /// path on success.
    pub fn validate(&self) -> Result<(ItemCondition, &Path)> {
        let condition = self.condition.ok_or_else(|| {
            ApiError::validation("kondisi_kembali", "Kondisi barang wajib diisi")
        })?;
        let photo = self
            .photo
            .as_deref()
            .ok_or_else(|| ApiError::validation("foto", "Foto bukti pengembalian wajib diisi"))?;
        validate_photo(photo)?;
        Ok((condition, photo))
    }
}

/// Checks a photo attachment against the upload rules.
///
/// The two failure modes deliberately carry distinct messages so a user can
/// tell a rejected file type from an oversized one.
pub fn validate_photo(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    let is_image = extension
        .as_deref()
        .is_some_and(|ext| PHOTO_EXTENSIONS.contains(&ext));
    if !is_image {
        return Err(ApiError::validation(
            "foto",
            "File harus berupa gambar (jpg, jpeg, png, gif, webp)",
        ));
    }
    let metadata = std::fs::metadata(path).map_err(|source| ApiError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > MAX_PHOTO_BYTES {
        return Err(ApiError::validation("foto", "Ukuran foto maksimal 5MB"));
    }
    Ok(())
}

/// Parameters for creating a user (admin only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name (required)
    pub name: String,
    /// Login email (required)
    pub email: String,
    /// Initial password (required)
    pub password: String,
    /// Role; defaults to regular borrower when omitted
    pub role: Option<Role>,
}

impl CreateUser {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("nama_pengguna", "Nama wajib diisi"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::validation("email", "Email tidak valid"));
        }
        if self.password.len() < 6 {
            return Err(ApiError::validation(
                "kata_sandi",
                "Kata sandi minimal 6 karakter",
            ));
        }
        Ok(())
    }
}

/// Parameters for updating a user (admin only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// User ID to update (required)
    pub id: u64,
    /// Updated display name
    pub name: Option<String>,
    /// Updated email
    pub email: Option<String>,
    /// Replacement password
    pub password: Option<String>,
    /// Updated role
    pub role: Option<Role>,
}

/// Filters for listing borrowings.
///
/// `overdue` is a client-side filter over the derived overdue label, not a
/// status the backend knows about; combining it with a `status` filter
/// intersects the two.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBorrowings {
    /// Restrict to a single lifecycle status
    pub status: Option<BorrowStatus>,
    /// Restrict to a single product
    pub product_id: Option<u64>,
    /// Keep only borrowings past their planned return date
    #[serde(default)]
    pub overdue: bool,
}

/// Report flavors the backend can render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportType {
    /// Full report covering every section
    #[default]
    #[serde(rename = "lengkap")]
    Lengkap,
    /// Executive summary
    #[serde(rename = "ringkasan")]
    Ringkasan,
    /// Borrowing activity only
    #[serde(rename = "peminjaman")]
    Peminjaman,
    /// Inventory state only
    #[serde(rename = "inventaris")]
    Inventaris,
}

impl ReportType {
    /// Wire representation, also used as the file-name stem for downloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Lengkap => "lengkap",
            ReportType::Ringkasan => "ringkasan",
            ReportType::Peminjaman => "peminjaman",
            ReportType::Inventaris => "inventaris",
        }
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lengkap" => Ok(ReportType::Lengkap),
            "ringkasan" => Ok(ReportType::Ringkasan),
            "peminjaman" => Ok(ReportType::Peminjaman),
            "inventaris" => Ok(ReportType::Inventaris),
            _ => Err(format!("Invalid report type: {s}")),
        }
    }
}

/// Parameters for report preview and download.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Which report flavor to render
    pub report_type: ReportType,
    /// Inclusive start of the reporting window
    pub start_date: Option<Date>,
    /// Inclusive end of the reporting window
    pub end_date: Option<Date>,
}

impl ReportRequest {
    /// Rejects an inverted date window before hitting the network.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ApiError::validation(
                    "tanggal",
                    "Tanggal akhir tidak boleh sebelum tanggal mulai",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::str::FromStr;

    use jiff::civil::date;

    use super::*;

    fn temp_photo(name: &str, bytes: usize) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        (dir, path)
    }

    #[test]
    fn test_credentials_require_both_fields() {
        let missing_email = Credentials {
            email: "  ".to_string(),
            password: "rahasia".to_string(),
        };
        assert!(matches!(
            missing_email.validate(),
            Err(ApiError::Validation { field, .. }) if field == "email"
        ));

        let ok = Credentials {
            email: "budi@kantor.id".to_string(),
            password: "rahasia".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_create_borrowing_quantity_bounds() {
        let params = CreateBorrowing {
            product_id: 1,
            quantity: Some(3),
            borrow_date: Some(date(2025, 10, 1)),
            planned_return_date: Some(date(2025, 10, 8)),
            purpose: None,
        };
        assert!(params.validate_against_available(3).is_ok());
        assert!(matches!(
            params.validate_against_available(2),
            Err(ApiError::Validation { field, .. }) if field == "jumlah_dipinjam"
        ));
    }

    #[test]
    fn test_create_borrowing_default_quantity_is_one() {
        let params = CreateBorrowing {
            product_id: 1,
            quantity: None,
            borrow_date: None,
            planned_return_date: Some(date(2025, 10, 8)),
            purpose: None,
        };
        assert!(params.validate_against_available(1).is_ok());
        assert!(params.validate_against_available(0).is_err());
    }

    #[test]
    fn test_create_borrowing_rejects_inverted_dates() {
        let params = CreateBorrowing {
            product_id: 1,
            quantity: Some(1),
            borrow_date: Some(date(2025, 10, 10)),
            planned_return_date: Some(date(2025, 10, 8)),
            purpose: None,
        };
        assert!(matches!(
            params.validate_against_available(5),
            Err(ApiError::Validation { field, .. }) if field == "tanggal_kembali_rencana"
        ));
    }

    #[test]
    fn test_return_submission_requires_photo() {
        let params = ReturnSubmission {
            borrowing_id: 1,
            condition: Some(ItemCondition::Baik),
            note: None,
            photo: None,
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("Foto bukti pengembalian"));
    }

    #[test]
    fn test_photo_wrong_type_gets_distinct_message() {
        let (_dir, path) = temp_photo("bukti.pdf", 100);
        let err = validate_photo(&path).unwrap_err();
        assert!(err.to_string().contains("File harus berupa gambar"));
    }

    #[test]
    fn test_photo_too_large_gets_distinct_message() {
        let (_dir, path) = temp_photo("bukti.jpg", 6 * 1024 * 1024);
        let err = validate_photo(&path).unwrap_err();
        assert!(err.to_string().contains("Ukuran foto maksimal 5MB"));
    }

    #[test]
    fn test_photo_at_limit_accepted() {
        let (_dir, path) = temp_photo("bukti.jpeg", MAX_PHOTO_BYTES as usize);
        assert!(validate_photo(&path).is_ok());
    }

    #[test]
    fn test_photo_extension_case_insensitive() {
        let (_dir, path) = temp_photo("Bukti.PNG", 100);
        assert!(validate_photo(&path).is_ok());
    }

    #[test]
    fn test_photo_missing_file_is_filesystem_error() {
        let err = validate_photo(Path::new("/nonexistent/bukti.jpg")).unwrap_err();
        assert!(matches!(err, ApiError::FileSystem { .. }));
    }

    #[test]
    fn test_update_product_rejects_no_op() {
        let params = UpdateProduct {
            id: 1,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = UpdateProduct {
            id: 1,
            total_stock: Some(5),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_update_category_rejects_no_op_and_blank_name() {
        let params = UpdateCategory {
            id: 2,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ApiError::Validation { field, .. }) if field == "update"
        ));

        let params = UpdateCategory {
            id: 2,
            name: Some("  ".to_string()),
            description: None,
        };
        assert!(matches!(
            params.validate(),
            Err(ApiError::Validation { field, .. }) if field == "nama"
        ));

        let params = UpdateCategory {
            id: 2,
            name: None,
            description: Some("Alat presentasi".to_string()),
        };
        assert!(params.validate().is_ok());
    }

    fn active_loan(planned: Date) -> Borrowing {
        Borrowing {
            id: 5,
            product_id: 1,
            product_name: None,
            user_id: None,
            user_name: None,
            quantity: 1,
            borrow_date: None,
            planned_return_date: Some(planned),
            actual_return_date: None,
            purpose: None,
            condition_at_loan: None,
            condition_at_return: None,
            return_photo: None,
            admin_note: None,
            status: BorrowStatus::Borrowed,
            created_at: None,
        }
    }

    #[test]
    fn test_extend_borrowing_requires_later_date() {
        let current = active_loan(date(2025, 10, 8));
        let params = ExtendBorrowing {
            borrowing_id: 5,
            new_return_date: Some(date(2025, 10, 15)),
            reason: None,
        };
        assert_eq!(
            params.validate_against_current(&current).unwrap(),
            date(2025, 10, 15)
        );

        let same_day = ExtendBorrowing {
            borrowing_id: 5,
            new_return_date: Some(date(2025, 10, 8)),
            reason: None,
        };
        assert!(matches!(
            same_day.validate_against_current(&current),
            Err(ApiError::Validation { field, .. }) if field == "tanggal_kembali_rencana"
        ));
    }

    #[test]
    fn test_extend_borrowing_only_for_active_loans() {
        let mut current = active_loan(date(2025, 10, 8));
        current.status = BorrowStatus::Pending;
        let params = ExtendBorrowing {
            borrowing_id: 5,
            new_return_date: Some(date(2025, 10, 15)),
            reason: Some("Masih dipakai rapat".to_string()),
        };
        assert!(matches!(
            params.validate_against_current(&current),
            Err(ApiError::Validation { field, .. }) if field == "status"
        ));
    }

    #[test]
    fn test_create_user_validation() {
        let params = CreateUser {
            name: "Budi".to_string(),
            email: "bukan-email".to_string(),
            password: "rahasia".to_string(),
            role: None,
        };
        assert!(matches!(
            params.validate(),
            Err(ApiError::Validation { field, .. }) if field == "email"
        ));

        let params = CreateUser {
            name: "Budi".to_string(),
            email: "budi@kantor.id".to_string(),
            password: "12345".to_string(),
            role: None,
        };
        assert!(matches!(
            params.validate(),
            Err(ApiError::Validation { field, .. }) if field == "kata_sandi"
        ));
    }

    #[test]
    fn test_report_request_date_window() {
        let params = ReportRequest {
            report_type: ReportType::Lengkap,
            start_date: Some(date(2025, 10, 10)),
            end_date: Some(date(2025, 10, 1)),
        };
        assert!(params.validate().is_err());

        let params = ReportRequest {
            report_type: ReportType::Ringkasan,
            start_date: Some(date(2025, 10, 1)),
            end_date: Some(date(2025, 10, 1)),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_report_type_parsing() {
        assert_eq!(
            ReportType::from_str("Peminjaman").unwrap(),
            ReportType::Peminjaman
        );
        assert!(ReportType::from_str("bulanan").is_err());
        assert_eq!(ReportType::Inventaris.as_str(), "inventaris");
    }
}
