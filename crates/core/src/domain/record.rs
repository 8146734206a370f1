use super::course::CourseField;
use super::term::{GpaTally, Term, DEFAULT_COURSE_SLOTS};
use crate::error::{CoreError, IndexTarget, Result};
use serde::{Deserialize, Serialize};

/// Every term a student has taken, in chronological order
///
/// The overall GPA is a snapshot: it is only updated by
/// [`AcademicRecord::compute_overall_gpa`] and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct AcademicRecord {
    /// Serialized under [`RECORD_KEY`](crate::ports::RECORD_KEY)
    terms: Vec<Term>,
    #[serde(skip)]
    overall_gpa: Option<f64>,
}

/// Persisted shape, validated on the way in
///
/// The `terms` key is required: a document without it is rejected rather
/// than read as a record with no terms.
#[derive(Deserialize)]
struct StoredRecord {
    terms: Vec<Term>,
}

impl TryFrom<StoredRecord> for AcademicRecord {
    type Error = CoreError;

    fn try_from(stored: StoredRecord) -> Result<Self> {
        Self::from_terms(stored.terms)
    }
}

impl AcademicRecord {
    /// First-run record: a single term of placeholder courses
    pub fn new() -> Self {
        Self {
            terms: vec![Term::with_placeholders(DEFAULT_COURSE_SLOTS)],
            overall_gpa: None,
        }
    }

    /// Build a record from existing terms, validating credits and
    /// recomputing each term's cached totals
    pub fn from_terms(mut terms: Vec<Term>) -> Result<Self> {
        for term in &mut terms {
            term.validate()?;
            term.refresh_totals();
        }
        Ok(Self {
            terms,
            overall_gpa: None,
        })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, index: usize) -> Result<&Term> {
        self.terms.get(index).ok_or(CoreError::IndexOutOfRange {
            target: IndexTarget::Term,
            index,
            len: self.terms.len(),
        })
    }

    fn term_mut(&mut self, index: usize) -> Result<&mut Term> {
        let len = self.terms.len();
        self.terms.get_mut(index).ok_or(CoreError::IndexOutOfRange {
            target: IndexTarget::Term,
            index,
            len,
        })
    }

    pub fn term_gpa(&self, index: usize) -> Result<f64> {
        self.term(index).map(Term::gpa)
    }

    /// GPA across every course of every term
    pub fn tally(&self) -> GpaTally {
        GpaTally::from_courses(self.terms.iter().flat_map(|term| term.courses()))
    }

    /// Recompute the overall GPA and store it as the current snapshot
    pub fn compute_overall_gpa(&mut self) -> f64 {
        let gpa = self.tally().gpa();
        self.overall_gpa = Some(gpa);
        gpa
    }

    /// Overall GPA as of the last [`compute_overall_gpa`](Self::compute_overall_gpa)
    pub fn overall_gpa(&self) -> Option<f64> {
        self.overall_gpa
    }

    pub fn total_credits(&self) -> f64 {
        self.terms.iter().map(Term::total_credits).sum()
    }

    pub fn earned_credits(&self) -> f64 {
        self.terms.iter().map(Term::earned_credits).sum()
    }

    pub fn set_course_field(
        &mut self,
        term_index: usize,
        course_index: usize,
        field: CourseField,
    ) -> Result<()> {
        self.term_mut(term_index)?
            .set_course_field(course_index, field)
    }

    pub fn remove_course(&mut self, term_index: usize, course_index: usize) -> Result<()> {
        self.term_mut(term_index)?.remove_course(course_index)?;
        Ok(())
    }

    /// Append a term of placeholder courses and return its index
    pub fn add_term(&mut self) -> usize {
        self.terms.push(Term::with_placeholders(DEFAULT_COURSE_SLOTS));
        self.terms.len() - 1
    }
}

impl Default for AcademicRecord {
    fn default() -> Self {
        Self::new()
    }
}
