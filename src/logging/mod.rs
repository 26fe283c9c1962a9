// file: src/logging/mod.rs
// version: 1.0.0
// guid: e5f6a7b8-c9d0-1234-5678-901234efabcd

//! Diagnostic logging for the slinky binaries

pub mod logger;

pub use logger::init_logger;
