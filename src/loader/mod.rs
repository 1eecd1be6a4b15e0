//! Metadata loader module
//!
//! Parse list metadata (`total`, `perPage`, `currentPage`) from YAML or JSON.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_metadata` - Read metadata from a file
//! - `load_metadata_from_str` / `load_metadata_from_json` - Parse inline content

mod parser;

pub use parser::{load_metadata, load_metadata_from_json, load_metadata_from_str};
