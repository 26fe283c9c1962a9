// file: src/cli/mod.rs
// version: 1.1.0
// guid: a3b4c5d6-e7f8-9012-3456-789012abcdef

//! Command line interface for both binaries

pub mod args;
pub mod commands;
pub mod generate;
