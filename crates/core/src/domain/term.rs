use super::course::{Course, CourseField};
use crate::error::{CoreError, IndexTarget, Result};
use serde::{Deserialize, Serialize};

/// Number of blank course rows a new term starts with
pub const DEFAULT_COURSE_SLOTS: usize = 10;

/// Running sums behind a GPA: grade points and the credits they were earned over
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GpaTally {
    pub quality_points: f64,
    pub attempted_credits: f64,
}

impl GpaTally {
    pub fn from_courses<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Self {
        let mut tally = Self::default();
        for course in courses {
            tally.add(course);
        }
        tally
    }

    /// Fold in a course if it is GPA-eligible; other courses are ignored
    pub fn add(&mut self, course: &Course) {
        if course.is_gpa_eligible() {
            self.quality_points += course.quality_points();
            self.attempted_credits += course.credits();
        }
    }

    /// Credit-weighted mean; `0.0` when nothing has been attempted yet
    pub fn gpa(&self) -> f64 {
        if self.attempted_credits > 0.0 {
            self.quality_points / self.attempted_credits
        } else {
            0.0
        }
    }
}

/// An academic period and its ordered course rows
///
/// `total_credits` and `earned_credits` are caches over `courses`. Every
/// mutating method refreshes them before returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default)]
    total_credits: f64,
    #[serde(default)]
    earned_credits: f64,
    #[serde(default)]
    courses: Vec<Course>,
}

impl Term {
    /// Term with `slots` independently owned placeholder courses
    pub fn with_placeholders(slots: usize) -> Self {
        Self::from_courses((0..slots).map(|_| Course::placeholder()).collect())
    }

    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut term = Self {
            total_credits: 0.0,
            earned_credits: 0.0,
            courses,
        };
        term.refresh_totals();
        term
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, index: usize) -> Result<&Course> {
        self.courses.get(index).ok_or(CoreError::IndexOutOfRange {
            target: IndexTarget::Course,
            index,
            len: self.courses.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of credits over every course, `F` and `W` included
    pub fn total_credits(&self) -> f64 {
        self.total_credits
    }

    /// Sum of credits over courses graded neither `F` nor `W`
    pub fn earned_credits(&self) -> f64 {
        self.earned_credits
    }

    pub fn tally(&self) -> GpaTally {
        GpaTally::from_courses(&self.courses)
    }

    /// Term GPA over eligible courses, or `0.0` if there are none
    pub fn gpa(&self) -> f64 {
        self.tally().gpa()
    }

    /// Replace one field of the course at `index`
    ///
    /// The record is untouched if the index or the new value is invalid.
    pub fn set_course_field(&mut self, index: usize, field: CourseField) -> Result<()> {
        let next = self.course(index)?.with_field(field)?;
        self.courses[index] = next;
        self.refresh_totals();
        Ok(())
    }

    /// Remove the course at `index`, shifting later courses left
    pub fn remove_course(&mut self, index: usize) -> Result<Course> {
        self.course(index)?;
        let removed = self.courses.remove(index);
        self.refresh_totals();
        Ok(removed)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.courses.iter().try_for_each(Course::validate)
    }

    pub(crate) fn refresh_totals(&mut self) {
        let (total, earned) = self
            .courses
            .iter()
            .fold((0.0, 0.0), |(total, earned), course| {
                let earned = if course.is_earned() {
                    earned + course.credits()
                } else {
                    earned
                };
                (total + course.credits(), earned)
            });
        self.total_credits = total;
        self.earned_credits = earned;
    }
}

impl Default for Term {
    fn default() -> Self {
        Self::with_placeholders(DEFAULT_COURSE_SLOTS)
    }
}
