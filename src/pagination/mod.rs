//! Pagination module
//!
//! Page count arithmetic and the transitions between pagination snapshots.
//!
//! # Overview
//!
//! A [`Pagination`] snapshot is derived from list metadata (total items, page
//! size, optional current page). The navigator transitions (`advance`,
//! `retreat`, `reset`) each return a complete new snapshot whose
//! `next_enabled` / `previous_enabled` flags agree with the page.
//!
//! Nothing here fails: degenerate inputs such as a zero page size or a
//! negative total are carried through [`PageCount`] for the consumer to
//! inspect.

mod navigator;
mod types;

pub use navigator::{initialize, initialize_from};
pub use types::{ListMetadata, PageCount, Pagination, FIRST_PAGE};
