//! Dashboard statistics reported by the backend.

use serde::{Deserialize, Serialize};

use super::Activity;

/// Aggregate counters shown at the top of the admin dashboard.
///
/// Every field defaults to zero; backend versions differ in which counters
/// they report, and a missing counter should not fail the whole view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsOverview {
    /// Registered users
    #[serde(rename = "total_pengguna", default)]
    pub total_users: u64,
    /// Products in the catalog
    #[serde(rename = "total_produk", default)]
    pub total_products: u64,
    /// Categories in the catalog
    #[serde(rename = "total_kategori", default)]
    pub total_categories: u64,
    /// Borrow requests ever recorded
    #[serde(rename = "total_peminjaman", default)]
    pub total_borrowings: u64,
    /// Loans currently out
    #[serde(rename = "sedang_dipinjam", default)]
    pub currently_borrowed: u64,
    /// Loans past their planned return date
    #[serde(rename = "terlambat", default)]
    pub overdue: u64,
}

/// Attention flags accompanying the dashboard counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsAlerts {
    #[serde(default)]
    pub overdue_count: u64,
    #[serde(default)]
    pub needs_attention: bool,
}

/// Full dashboard statistics payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub overview: StatsOverview,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
    #[serde(default)]
    pub alerts: StatsAlerts,
}
