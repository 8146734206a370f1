pub mod persistence;

// Re-exports
pub use persistence::*;
