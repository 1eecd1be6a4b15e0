//! State management module
//!
//! Owns the live pagination state for a list view.
//!
//! # Overview
//!
//! The state module provides:
//! - `PaginationStore` - Shared handle to the current `Pagination` snapshot
//! - Navigation (`advance`, `retreat`, `reset`) applied as whole-value replaces
//! - Change notification through `tokio::sync::watch` subscribers

mod store;

pub use store::PaginationStore;
