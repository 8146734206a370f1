use super::grade::Grade;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// A single course row within a term
///
/// Courses are plain values: they have no identity beyond their position in
/// the owning term. Edits produce a new value via [`Course::with_field`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    name: String,
    #[serde_as(as = "DisplayFromStr")]
    grade: Grade,
    credits: f64,
}

impl Course {
    pub fn new(name: impl Into<String>, grade: Grade, credits: f64) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            grade,
            credits: validate_credits(credits)?,
        })
    }

    /// Blank row: empty name, grade `F`, zero credits
    pub fn placeholder() -> Self {
        Self {
            name: String::new(),
            grade: Grade::F,
            credits: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn credits(&self) -> f64 {
        self.credits
    }

    /// Whether this course enters the GPA numerator and divisor
    pub fn is_gpa_eligible(&self) -> bool {
        self.grade.counts_toward_gpa() && self.credits > 0.0
    }

    /// Whether this course's credits count as earned
    pub fn is_earned(&self) -> bool {
        self.grade.counts_toward_gpa()
    }

    pub fn quality_points(&self) -> f64 {
        self.grade.weight() * self.credits
    }

    /// Build a new course with one field replaced
    pub fn with_field(&self, field: CourseField) -> Result<Self> {
        let mut next = self.clone();
        match field {
            CourseField::Name(name) => next.name = name,
            CourseField::Grade(grade) => next.grade = grade,
            CourseField::Credits(credits) => next.credits = validate_credits(credits)?,
        }
        Ok(next)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_credits(self.credits).map(|_| ())
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// One editable field of a course, carrying its new value
#[derive(Debug, Clone, PartialEq)]
pub enum CourseField {
    Name(String),
    Grade(Grade),
    Credits(f64),
}

impl CourseField {
    /// Parse a `(field, value)` pair as entered by a user
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(CourseField::Name(value.to_string())),
            "grade" => Ok(CourseField::Grade(value.trim().parse()?)),
            "credits" | "credit" => {
                let credits = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| CoreError::InvalidCredits {
                        value: value.to_string(),
                    })?;
                Ok(CourseField::Credits(validate_credits(credits)?))
            }
            _ => Err(CoreError::UnknownField {
                field: field.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CourseField::Name(_) => "name",
            CourseField::Grade(_) => "grade",
            CourseField::Credits(_) => "credits",
        }
    }
}

/// Largest credit value a single course may carry
pub const MAX_CREDITS: f64 = 1_000.0;

/// Reject NaN, negative and out-of-range credit values
pub fn validate_credits(credits: f64) -> Result<f64> {
    if (0.0..=MAX_CREDITS).contains(&credits) {
        // Normalise -0.0
        Ok(credits + 0.0)
    } else {
        Err(CoreError::InvalidCredits {
            value: credits.to_string(),
        })
    }
}
