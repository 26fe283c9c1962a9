// file: src/links/mod.rs
// version: 1.0.0
// guid: c9d0e1f2-a3b4-5678-9012-345678cdefab

//! Symlink discovery, rewriting, and creation

pub mod create;
pub mod scan;
pub mod transform;

pub use scan::{LinkEntry, LinkFilters, LinkScanner};
