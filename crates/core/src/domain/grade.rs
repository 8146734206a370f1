//! Fixed letter-grade scale.

use crate::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

/// A letter grade on the fixed 13-symbol scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    /// Failed attempt
    F,
    /// Withdrawal
    W,
}

impl Grade {
    /// Every grade in display order, best first
    pub const ALL: [Grade; 13] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::DMinus,
        Grade::F,
        Grade::W,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
            Grade::W => "W",
        }
    }

    /// Grade points per credit
    pub fn weight(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::AMinus => 3.7,
            Grade::BPlus => 3.3,
            Grade::B => 3.0,
            Grade::BMinus => 2.7,
            Grade::CPlus => 2.3,
            Grade::C => 2.0,
            Grade::CMinus => 1.7,
            Grade::DPlus => 1.3,
            Grade::D => 1.0,
            Grade::DMinus => 0.7,
            Grade::F | Grade::W => 0.0,
        }
    }

    /// False for `F` and `W`, which count toward neither GPA nor earned credits
    pub fn counts_toward_gpa(self) -> bool {
        !matches!(self, Grade::F | Grade::W)
    }

    /// Symbols in display order, for populating a grade picker
    pub fn symbols() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|grade| grade.symbol())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Grade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|grade| grade.symbol() == s)
            .ok_or_else(|| CoreError::UnknownGradeSymbol {
                symbol: s.to_string(),
            })
    }
}

/// Resolve a grade symbol to its numeric weight
pub fn weight_of(symbol: &str) -> Result<f64> {
    symbol.parse::<Grade>().map(Grade::weight)
}
