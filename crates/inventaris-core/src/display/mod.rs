//! Display formatting functions and result types.
//!
//! This module combines direct Display implementations on domain models with
//! newtype wrappers for collections and operation results, so every output
//! context renders through one consistent markdown-flavored pipeline.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers & Result│   │   Formatted     │
//! │ (Product, User, │───▶│ Types (Products, │──▶│    Output       │
//! │  Borrowing, …)  │    │ CreateResult, …) │   │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Products, Borrowings, …)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! All formatters produce markdown for rich terminal display; empty
//! collections render a "No … found." line rather than nothing.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Activities, Availabilities, Borrowings, Categories, Products, Users};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
