//! Plain-text rendering of the record for the terminal.

use gradebook_core::app::{RecordSummary, TermSummary};
use gradebook_core::{Course, Grade};
use std::fmt::Write;

use crate::config::DisplayConfig;

pub fn render_summary(summary: &RecordSummary, display: &DisplayConfig) -> String {
    let mut out = String::new();
    for term in &summary.terms {
        render_term(&mut out, term, display);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "All terms: {} credits, {} earned",
        format_credits(summary.total_credits),
        format_credits(summary.earned_credits)
    );
    if let Some(gpa) = summary.overall_gpa {
        let _ = writeln!(out, "{}", render_overall_gpa(gpa, display));
    }
    out
}

fn render_term(out: &mut String, term: &TermSummary, display: &DisplayConfig) {
    let _ = writeln!(out, "Term {}", term.number);
    for (index, course) in term.courses.iter().enumerate() {
        if !display.show_empty_courses && *course == Course::placeholder() {
            continue;
        }
        let name = if course.name().is_empty() {
            format!("Course {}", index + 1)
        } else {
            course.name().to_string()
        };
        let _ = writeln!(
            out,
            "  {:>2}. {:<30} {:<2} {:>5}",
            index + 1,
            name,
            course.grade(),
            format_credits(course.credits())
        );
    }
    let _ = writeln!(out, "  Term GPA: {:.*}", display.precision, term.gpa);
    let _ = writeln!(out, "  Total Credits: {}", format_credits(term.total_credits));
    let _ = writeln!(out, "  Earned Credits: {}", format_credits(term.earned_credits));
}

pub fn render_overall_gpa(gpa: f64, display: &DisplayConfig) -> String {
    format!("Overall GPA: {:.*}", display.precision, gpa)
}

pub fn render_grade_scale() -> String {
    let mut out = String::new();
    for grade in Grade::ALL {
        let note = match grade {
            Grade::F => "  (failed, excluded from GPA)",
            Grade::W => "  (withdrawn, excluded from GPA)",
            _ => "",
        };
        let _ = writeln!(out, "{:<2} {:.1}{}", grade, grade.weight(), note);
    }
    out
}

/// Whole credits print without a fractional part
fn format_credits(credits: f64) -> String {
    if credits.fract() == 0.0 {
        format!("{credits:.0}")
    } else {
        credits.to_string()
    }
}
