//! Data models for the inventory borrowing domain.
//!
//! Every struct mirrors the backend's JSON wire shape (Indonesian field
//! names) while exposing English field names in Rust. Derived views such as
//! availability live outside this module.

mod activity;
mod borrowing;
mod category;
mod product;
mod stats;
mod status;
mod user;

pub use activity::Activity;
pub use borrowing::Borrowing;
pub use category::Category;
pub use product::Product;
pub use stats::{DashboardStats, StatsAlerts, StatsOverview};
pub use status::{BorrowStatus, ItemCondition, Role};
pub use user::User;
