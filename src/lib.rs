// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # list-pager
//!
//! Pagination state for list views: derive the page count from a total and a
//! page size, track the active page, and navigate with flags that always
//! agree with the position.
//!
//! ## Features
//!
//! - **Page count arithmetic**: `ceil(total / per_page)`, with degenerate inputs
//!   (zero page size, negative values) carried through instead of rejected
//! - **Navigation**: next, previous and first page, each producing a complete
//!   new snapshot
//! - **Shared store**: a cloneable handle with watch-channel subscribers
//! - **CLI**: inspect and drive pagination from the command line
//!
//! ## Quick Start
//!
//! ```rust
//! use list_pager::{PageCount, PaginationStore};
//!
//! let store = PaginationStore::new();
//! store.initialize(10, 2, None);
//!
//! let state = store.advance();
//! assert_eq!(state.current_page, 2);
//! assert_eq!(state.total_pages, PageCount::Finite(5));
//! assert!(state.previous_enabled);
//!
//! let state = store.reset();
//! assert_eq!(state.current_page, 1);
//! assert!(!state.previous_enabled);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   initialize()    ┌──────────────────────┐
//! │  Metadata supplier   │ ────────────────▶ │   PaginationStore    │
//! │ (loader / CLI args)  │                   │  current() snapshot  │
//! └──────────────────────┘                   │  subscribe() watch   │
//!                                            └──────────┬───────────┘
//! ┌──────────────────────┐ advance/retreat/reset        │
//! │ Rendering / controls │ ◀────────────────────────────┘
//! │     (cli::view)      │
//! └──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Page count arithmetic and navigation transitions
pub mod pagination;

/// Shared pagination store
pub mod state;

/// Metadata loading from YAML/JSON
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{ListMetadata, PageCount, Pagination};
pub use state::PaginationStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
