//! Display implementations for domain models.
//!
//! Display trait implementations live here, separated from the model
//! definitions to keep wire-shape concerns and presentation concerns apart.
//! Output is markdown for rich terminal display, with Indonesian labels
//! matching the backend's own screens.

use std::fmt;

use jiff::Zoned;

use super::datetime::LocalDateTime;
use crate::availability::{AvailabilityStatus, ProductAvailability};
use crate::models::{
    Activity, BorrowStatus, Borrowing, Category, DashboardStats, ItemCondition, Product, Role,
    User,
};

impl fmt::Display for BorrowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        if let Some(category) = &self.category_name {
            writeln!(f, "- **Kategori**: {category}")?;
        }
        writeln!(f, "- **Stok total**: {}", self.total_stock)?;
        writeln!(f, "- **Stok minimum**: {}", self.minimum_stock)?;
        if let Some(created) = &self.created_at {
            writeln!(f, "- **Dibuat**: {}", LocalDateTime(created))?;
        }
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProductAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) [{}]",
            self.product.name,
            self.product.id,
            self.status.label()
        )?;
        writeln!(f)?;
        if let Some(category) = &self.product.category_name {
            writeln!(f, "- **Kategori**: {category}")?;
        }
        writeln!(
            f,
            "- **Tersedia**: {} dari {}",
            self.available, self.product.total_stock
        )?;
        if self.borrowed > 0 {
            writeln!(
                f,
                "- **Sedang dipinjam**: {} ({} peminjaman aktif)",
                self.borrowed, self.active_borrowings
            )?;
        }
        writeln!(f, "- **Dihitung**: {}", LocalDateTime(&self.computed_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Email**: {}", self.email)?;
        writeln!(f, "- **Peran**: {}", self.role.as_str())?;
        writeln!(f)
    }
}

impl fmt::Display for Borrowing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product = self.product_name.as_deref().unwrap_or("?");
        let overdue = if self.is_overdue(Zoned::now().date()) {
            " (Terlambat)"
        } else {
            ""
        };
        writeln!(
            f,
            "## Peminjaman #{} - {} [{}]{overdue}",
            self.id,
            product,
            self.status.label()
        )?;
        writeln!(f)?;
        if let Some(user) = &self.user_name {
            writeln!(f, "- **Peminjam**: {user}")?;
        }
        writeln!(f, "- **Jumlah**: {}", self.quantity)?;
        if let Some(date) = &self.borrow_date {
            writeln!(f, "- **Tanggal pinjam**: {date}")?;
        }
        if let Some(date) = &self.planned_return_date {
            writeln!(f, "- **Rencana kembali**: {date}")?;
        }
        if let Some(date) = &self.actual_return_date {
            writeln!(f, "- **Dikembalikan**: {date}")?;
        }
        if let Some(condition) = &self.condition_at_return {
            writeln!(f, "- **Kondisi kembali**: {condition}")?;
        }
        if let Some(purpose) = &self.purpose {
            writeln!(f, "- **Keperluan**: {purpose}")?;
        }
        if let Some(note) = &self.admin_note {
            writeln!(f, "- **Catatan admin**: {note}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(created) = &self.created_at {
            write!(f, "- [{}] ", LocalDateTime(created))?;
        } else {
            write!(f, "- ")?;
        }
        if let Some(user) = &self.user_name {
            write!(f, "{user}: ")?;
        }
        writeln!(f, "{}", self.description)
    }
}

impl fmt::Display for DashboardStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Statistik")?;
        writeln!(f)?;
        writeln!(f, "- **Pengguna**: {}", self.overview.total_users)?;
        writeln!(f, "- **Produk**: {}", self.overview.total_products)?;
        writeln!(f, "- **Kategori**: {}", self.overview.total_categories)?;
        writeln!(
            f,
            "- **Total peminjaman**: {}",
            self.overview.total_borrowings
        )?;
        writeln!(
            f,
            "- **Sedang dipinjam**: {}",
            self.overview.currently_borrowed
        )?;
        writeln!(f, "- **Terlambat**: {}", self.overview.overdue)?;
        if self.alerts.needs_attention {
            writeln!(f)?;
            writeln!(
                f,
                "**Perhatian**: {} peminjaman terlambat",
                self.alerts.overdue_count
            )?;
        }
        if !self.recent_activities.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Aktivitas terbaru")?;
            writeln!(f)?;
            for activity in &self.recent_activities {
                write!(f, "{activity}")?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::BorrowStatus;

    use super::*;

    #[test]
    fn test_borrowing_display_marks_overdue() {
        let borrowing = Borrowing {
            id: 9,
            product_id: 1,
            product_name: Some("Proyektor".to_string()),
            user_id: None,
            user_name: Some("Sari".to_string()),
            quantity: 1,
            borrow_date: Some(date(2020, 1, 1)),
            planned_return_date: Some(date(2020, 1, 8)),
            actual_return_date: None,
            purpose: None,
            condition_at_loan: None,
            condition_at_return: None,
            return_photo: None,
            admin_note: None,
            status: BorrowStatus::Borrowed,
            created_at: None,
        };
        let output = format!("{borrowing}");
        assert!(output.contains("Peminjaman #9"));
        assert!(output.contains("[Dipinjam]"));
        assert!(output.contains("(Terlambat)"));

        let returned = Borrowing {
            status: BorrowStatus::Returned,
            ..borrowing
        };
        let output = format!("{returned}");
        assert!(output.contains("[Dikembalikan]"));
        assert!(!output.contains("(Terlambat)"));
    }

    #[test]
    fn test_dashboard_stats_display_flags_overdue() {
        let stats = DashboardStats {
            overview: crate::models::StatsOverview {
                total_users: 12,
                total_products: 40,
                overdue: 2,
                ..Default::default()
            },
            recent_activities: Vec::new(),
            alerts: crate::models::StatsAlerts {
                overdue_count: 2,
                needs_attention: true,
            },
        };
        let output = format!("{stats}");
        assert!(output.contains("**Produk**: 40"));
        assert!(output.contains("Perhatian"));
        assert!(output.contains("2 peminjaman terlambat"));
    }

    #[test]
    fn test_status_displays_use_labels() {
        assert_eq!(format!("{}", BorrowStatus::PendingReturn), "Menunggu Verifikasi");
        assert_eq!(format!("{}", AvailabilityStatus::Unavailable), "Sedang Dipinjam");
    }
}
