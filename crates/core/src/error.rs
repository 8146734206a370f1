use thiserror::Error;

/// What an out-of-range index was addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    Term,
    Course,
}

impl std::fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexTarget::Term => write!(f, "term"),
            IndexTarget::Course => write!(f, "course"),
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown grade symbol: {symbol:?}")]
    UnknownGradeSymbol { symbol: String },

    #[error("{target} index {index} out of range (len {len})")]
    IndexOutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    #[error("Invalid credits: {value} (must be a number from 0 to 1000)")]
    InvalidCredits { value: String },

    #[error("Unknown course field: {field} (expected name, grade or credits)")]
    UnknownField { field: String },
}

impl CoreError {
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, CoreError::IndexOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
