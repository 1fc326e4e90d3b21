//! Core library for the Inventaris borrowing client.
//!
//! This crate provides the client-side business logic for an inventory
//! borrowing system: typed models for the backend's JSON API, client-side
//! availability derivation, parameter validation, session persistence, and
//! an async HTTP client.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inventaris_core::{params::Credentials, ClientBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new()
//!     .with_base_url(Some("http://localhost:5000"))
//!     .build()?;
//!
//! let session = client
//!     .login(&Credentials {
//!         email: "budi@kantor.id".to_string(),
//!         password: "rahasia".to_string(),
//!     })
//!     .await?;
//! println!("Logged in as {}", session.user.name);
//!
//! for view in client.list_products_with_availability().await? {
//!     println!("{}: {} available", view.product.name, view.available);
//! }
//! # Ok(())
//! # }
//! ```

pub mod availability;
pub mod client;
pub mod display;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use availability::{derive_availability, AvailabilityStatus, ProductAvailability};
pub use client::{ApiClient, ClientBuilder, ReportDownload};
pub use display::{
    Activities, Availabilities, Borrowings, Categories, CreateResult, DeleteResult,
    OperationStatus, Products, UpdateResult, Users,
};
pub use envelope::ApiEnvelope;
pub use error::{ApiError, Result};
pub use guard::{check_access, home_route, Access, Route};
pub use models::{
    Activity, BorrowStatus, Borrowing, Category, DashboardStats, ItemCondition, Product, Role,
    StatsAlerts, StatsOverview, User,
};
pub use params::{
    CreateBorrowing, CreateCategory, CreateProduct, CreateUser, Credentials, ExtendBorrowing, Id,
    ListBorrowings, ReportRequest, ReportType, ReturnSubmission, UpdateCategory, UpdateProduct,
    UpdateUser,
};
pub use session::{Session, SessionStore};
