use crate::domain::{AcademicRecord, Course, Term};

/// Read-only projection of one term for display
#[derive(Debug, Clone, PartialEq)]
pub struct TermSummary {
    /// 1-based term number, as shown to users
    pub number: usize,
    pub gpa: f64,
    pub total_credits: f64,
    pub earned_credits: f64,
    pub courses: Vec<Course>,
}

impl TermSummary {
    fn from_term(index: usize, term: &Term) -> Self {
        Self {
            number: index + 1,
            gpa: term.gpa(),
            total_credits: term.total_credits(),
            earned_credits: term.earned_credits(),
            courses: term.courses().to_vec(),
        }
    }
}

/// Read-only projection of the whole record for display
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSummary {
    pub terms: Vec<TermSummary>,

    /// Last computed overall GPA; `None` until requested
    pub overall_gpa: Option<f64>,

    pub total_credits: f64,
    pub earned_credits: f64,
}

impl RecordSummary {
    pub fn from_record(record: &AcademicRecord) -> Self {
        Self {
            terms: record
                .terms()
                .iter()
                .enumerate()
                .map(|(index, term)| TermSummary::from_term(index, term))
                .collect(),
            overall_gpa: record.overall_gpa(),
            total_credits: record.total_credits(),
            earned_credits: record.earned_credits(),
        }
    }
}
