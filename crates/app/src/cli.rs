use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gradebook")]
#[command(about = "Track academic terms and courses and compute term and overall GPA")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the record file (overrides config)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Term and course numbers are 1-based, as displayed by `show`
#[derive(Subcommand, Debug, PartialEq)]
pub enum CliCommand {
    /// Show every term with its courses, GPA and credit totals
    Show,

    /// Set a course field (name, grade or credits)
    Set {
        term: NonZeroUsize,
        course: NonZeroUsize,
        field: String,
        /// New value; use an empty string to clear a name
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove a course from a term
    Remove {
        term: NonZeroUsize,
        course: NonZeroUsize,
    },

    /// Append a new term with blank course rows
    AddTerm,

    /// Compute the overall GPA across all terms
    Gpa,

    /// List the grade scale
    Grades,
}

/// Convert a displayed 1-based number to a zero-based index
pub fn to_index(number: NonZeroUsize) -> usize {
    number.get() - 1
}
