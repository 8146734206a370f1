pub mod grade;
pub mod course;
pub mod term;
pub mod record;

// Re-exports for convenience
pub use grade::*;
pub use course::*;
pub use term::*;
pub use record::*;
