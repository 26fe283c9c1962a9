// file: src/lib.rs
// version: 1.2.0
// guid: c3d4e5f6-a7b8-9012-3456-789012cdefab

//! # slinky
//!
//! A pair of command line tools for wrangling symbolic links:
//!
//! - `slinky` walks a directory tree and performs an operation on every
//!   symlink it finds (list, convert between absolute/relative, tidy,
//!   regex-edit targets, replace with hardlinks or real trees, delete,
//!   or run an arbitrary shell command).
//! - `slinky-ln` creates individual symlinks, hardlinks, and link trees
//!   with safer semantics than `ln`.
//!
//! Both binaries share the modules in this crate.

pub mod cli;
pub mod error;
pub mod links;
pub mod logging;
pub mod report;

pub use error::{Result, SlinkyError};

/// Version information for the tools
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
