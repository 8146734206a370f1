//! Gradebook Core - Pure domain logic with no external dependencies
//!
//! This crate contains the grade scale, the academic record model, the
//! command/query types the presentation layer talks in, and the persistence
//! port. It performs no I/O - storage is handled by adapters.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
