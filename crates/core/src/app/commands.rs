use crate::domain::course::CourseField;

/// Commands the presentation layer issues against the academic record
///
/// Indices are zero-based positions in the record's term and course sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace one field of a course
    SetCourseField {
        term: usize,
        course: usize,
        field: CourseField,
    },

    /// Delete a course, shifting later courses left
    RemoveCourse { term: usize, course: usize },

    /// Append a term of blank course rows
    AddTerm,

    /// Recompute and snapshot the overall GPA
    ComputeOverallGpa,
}

impl Command {
    /// Whether the command changes persisted state
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Command::ComputeOverallGpa)
    }
}
