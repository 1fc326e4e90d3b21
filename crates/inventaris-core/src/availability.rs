//! Client-side availability derivation.
//!
//! The backend reports total stock per product and the full list of
//! borrowings; what a user actually cares about is how many units they can
//! borrow right now. That number is derived here rather than trusted from
//! the backend, because the backend's own "available" flag has historically
//! lagged behind the borrowing table.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::{Borrowing, Product};

/// Derived availability bucket for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// Units available above the minimum-stock threshold
    #[serde(rename = "tersedia")]
    Available,
    /// Units available, but at or below the minimum-stock threshold
    #[serde(rename = "stok_terbatas")]
    Limited,
    /// No units available
    #[serde(rename = "tidak_tersedia")]
    Unavailable,
}

impl AvailabilityStatus {
    /// Human-readable Indonesian label.
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "Tersedia",
            AvailabilityStatus::Limited => "Stok Terbatas",
            AvailabilityStatus::Unavailable => "Sedang Dipinjam",
        }
    }
}

/// A product joined with its derived availability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductAvailability {
    /// The product as the backend reported it
    pub product: Product,

    /// Units available to borrow right now
    pub available: u32,

    /// Units out across all active loans
    pub borrowed: u32,

    /// Number of distinct active borrowings contributing to `borrowed`
    pub active_borrowings: u32,

    /// Derived bucket
    pub status: AvailabilityStatus,

    /// When this view was computed; availability is a snapshot, not a
    /// subscription, and goes stale the moment someone else borrows
    pub computed_at: Timestamp,
}

impl ProductAvailability {
    /// Derive availability for one product against a set of borrowings.
    ///
    /// Only borrowings whose status keeps stock reserved count (an item out
    /// with a borrower, or a return still awaiting verification). A quantity
    /// sum exceeding total stock clamps to zero available rather than going
    /// negative, since overlapping legacy records do occur.
    pub fn derive(product: Product, borrowings: &[Borrowing]) -> Self {
        let active: Vec<&Borrowing> = borrowings
            .iter()
            .filter(|b| b.product_id == product.id && b.status.is_active_loan())
            .collect();
        let borrowed: u32 = active.iter().map(|b| b.quantity).sum();
        let available = product.total_stock.saturating_sub(borrowed);
        let status = bucket(available, product.minimum_stock);
        ProductAvailability {
            product,
            available,
            borrowed,
            active_borrowings: active.len() as u32,
            status,
            computed_at: Timestamp::now(),
        }
    }

    /// Degraded fallback when the borrowing list could not be fetched.
    ///
    /// Treats the full stock as available, which is the same optimistic view
    /// the backend's own listing shows. Callers should surface that the
    /// figure is unverified.
    pub fn from_product_only(product: Product) -> Self {
        let available = product.total_stock;
        let status = bucket(available, product.minimum_stock);
        ProductAvailability {
            product,
            available,
            borrowed: 0,
            active_borrowings: 0,
            status,
            computed_at: Timestamp::now(),
        }
    }
}

fn bucket(available: u32, minimum_stock: u32) -> AvailabilityStatus {
    if available == 0 {
        AvailabilityStatus::Unavailable
    } else if available <= minimum_stock {
        AvailabilityStatus::Limited
    } else {
        AvailabilityStatus::Available
    }
}

/// Derive availability for every product in one pass.
pub fn derive_availability(
    products: Vec<Product>,
    borrowings: &[Borrowing],
) -> Vec<ProductAvailability> {
    products
        .into_iter()
        .map(|p| ProductAvailability::derive(p, borrowings))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::models::BorrowStatus;

    use super::*;

    fn product(id: u64, total: u32, minimum: u32) -> Product {
        Product {
            id,
            name: format!("Barang {id}"),
            description: None,
            category_id: None,
            category_name: None,
            total_stock: total,
            minimum_stock: minimum,
            photo: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn loan(product_id: u64, quantity: u32, status: BorrowStatus) -> Borrowing {
        Borrowing {
            id: 0,
            product_id,
            product_name: None,
            user_id: None,
            user_name: None,
            quantity,
            borrow_date: None,
            planned_return_date: None,
            actual_return_date: None,
            purpose: None,
            condition_at_loan: None,
            condition_at_return: None,
            return_photo: None,
            admin_note: None,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_available_subtracts_active_quantities() {
        let borrowings = vec![
            loan(1, 2, BorrowStatus::Borrowed),
            loan(1, 1, BorrowStatus::Borrowed),
        ];
        let view = ProductAvailability::derive(product(1, 5, 1), &borrowings);
        assert_eq!(view.available, 2);
        assert_eq!(view.borrowed, 3);
        assert_eq!(view.active_borrowings, 2);
        assert_eq!(view.status, AvailabilityStatus::Available);
    }

    #[test]
    fn test_available_clamps_at_zero() {
        let borrowings = vec![loan(1, 5, BorrowStatus::Borrowed)];
        let view = ProductAvailability::derive(product(1, 2, 1), &borrowings);
        assert_eq!(view.available, 0);
        assert_eq!(view.status, AvailabilityStatus::Unavailable);
        assert_eq!(view.status.label(), "Sedang Dipinjam");
    }

    #[test]
    fn test_pending_return_still_reserves_stock() {
        let borrowings = vec![loan(1, 1, BorrowStatus::PendingReturn)];
        let view = ProductAvailability::derive(product(1, 1, 1), &borrowings);
        assert_eq!(view.available, 0);
        assert_eq!(view.status, AvailabilityStatus::Unavailable);
    }

    #[test]
    fn test_pending_and_terminal_statuses_do_not_reserve() {
        let borrowings = vec![
            loan(1, 2, BorrowStatus::Pending),
            loan(1, 2, BorrowStatus::Approved),
            loan(1, 2, BorrowStatus::Returned),
            loan(1, 2, BorrowStatus::Rejected),
        ];
        let view = ProductAvailability::derive(product(1, 4, 1), &borrowings);
        assert_eq!(view.available, 4);
        assert_eq!(view.active_borrowings, 0);
    }

    #[test]
    fn test_limited_bucket_at_or_below_minimum() {
        let borrowings = vec![loan(1, 3, BorrowStatus::Borrowed)];
        let view = ProductAvailability::derive(product(1, 5, 2), &borrowings);
        assert_eq!(view.available, 2);
        assert_eq!(view.status, AvailabilityStatus::Limited);
        assert_eq!(view.status.label(), "Stok Terbatas");
    }

    #[test]
    fn test_other_products_ignored() {
        let borrowings = vec![loan(2, 5, BorrowStatus::Borrowed)];
        let view = ProductAvailability::derive(product(1, 3, 1), &borrowings);
        assert_eq!(view.available, 3);
    }

    #[test]
    fn test_fallback_view_is_optimistic() {
        let view = ProductAvailability::from_product_only(product(1, 3, 1));
        assert_eq!(view.available, 3);
        assert_eq!(view.borrowed, 0);
        assert_eq!(view.status, AvailabilityStatus::Available);
    }

    #[test]
    fn test_derive_availability_covers_all_products() {
        let products = vec![product(1, 5, 1), product(2, 1, 1)];
        let borrowings = vec![loan(2, 1, BorrowStatus::Borrowed)];
        let views = derive_availability(products, &borrowings);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].available, 5);
        assert_eq!(views[1].available, 0);
    }
}
