//! Gradebook application library
//!
//! Adapters, configuration and the record service that sit around
//! `gradebook-core`. Exposed for testing and embedding.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod render;
pub mod services;
