//! CLI module
//!
//! Command-line front end that drives a `PaginationStore` the way a list
//! view would.
//!
//! # Commands
//!
//! - `show` - Derive pagination from metadata and print it
//! - `navigate` - Apply `next` / `prev` / `first` actions and print the result
//! - `repl` - Interactive session; snapshots are printed as they change

mod commands;
mod runner;
pub mod view;

pub use commands::{Action, Cli, Commands, MetadataArgs, ReplCommand};
pub use runner::{apply_action, render, resolve_metadata, run_repl, Runner};
pub use view::{Control, ListView};
