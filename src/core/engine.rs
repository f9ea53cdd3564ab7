//! GPA/CGPA computation and classification
//!
//! Pure functions over the course and semester models. All averages are
//! rounded to two decimal places before being stored or compared.

use crate::core::models::{Course, Semester};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the credit-weighted GPA for one semester's courses.
///
/// GPA = Σ(points × credit units) / Σ(credit units), rounded to two
/// decimals. An empty course list yields 0, the "not yet computed"
/// sentinel; it is not a meaningful GPA of zero.
#[must_use]
pub fn semester_gpa(courses: &[Course]) -> f64 {
    if courses.is_empty() {
        return 0.0;
    }

    let total_points: f64 = courses.iter().map(Course::quality_points).sum();
    let total_units: u32 = courses.iter().map(|c| c.credit_unit).sum();

    round2(total_points / f64::from(total_units))
}

/// Compute the cumulative GPA over a set of semesters.
///
/// Semesters with empty course lists are excluded entirely, not treated
/// as zero. Returns `None` when nothing remains to average.
///
/// The cumulative value is the unweighted mean of per-semester GPAs, not
/// a credit-weighted average across all courses; two semesters with very
/// different credit loads contribute equally.
#[must_use]
pub fn cumulative_gpa(semesters: &[Semester]) -> Option<f64> {
    let gpas: Vec<f64> = semesters
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| semester_gpa(&s.courses))
        .collect();

    if gpas.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = gpas.iter().sum::<f64>() / gpas.len() as f64;
    Some(round2(mean))
}

/// The five ordered classification bands for a CGPA value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// CGPA in [3.50, ∞)
    Distinction,
    /// CGPA in [3.00, 3.50)
    UpperCredit,
    /// CGPA in [2.50, 3.00)
    LowerCredit,
    /// CGPA in [2.00, 2.50)
    Pass,
    /// CGPA below 2.00
    Fail,
}

impl Classification {
    /// Classify a CGPA value. Bands are inclusive on the lower end and
    /// evaluated highest-first; every finite input maps to exactly one band.
    #[must_use]
    pub fn from_cgpa(cgpa: f64) -> Self {
        match cgpa {
            c if c >= 3.50 => Self::Distinction,
            c if c >= 3.00 => Self::UpperCredit,
            c if c >= 2.50 => Self::LowerCredit,
            c if c >= 2.00 => Self::Pass,
            _ => Self::Fail,
        }
    }

    /// Human-readable band name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Distinction => "Distinction",
            Self::UpperCredit => "Upper Credit",
            Self::LowerCredit => "Lower Credit",
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::Grade;

    fn course(grade: Grade, credits: u32) -> Course {
        Course::new(String::new(), String::new(), grade, credits)
    }

    fn semester(id: &str, courses: Vec<Course>) -> Semester {
        let mut s = Semester::new(id.to_string());
        for c in courses {
            s.add_course(c);
        }
        s
    }

    #[test]
    fn gpa_of_empty_course_list_is_zero() {
        assert!(semester_gpa(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn gpa_is_credit_weighted() {
        // (4.00×3 + 0.00×1) / 4 = 3.00
        let courses = vec![course(Grade::A, 3), course(Grade::F, 1)];
        assert!((semester_gpa(&courses) - 3.00).abs() < f64::EPSILON);
    }

    #[test]
    fn gpa_rounds_to_two_decimals() {
        // (3.25×1 + 3.10×2) / 3 = 3.15
        let courses = vec![course(Grade::B, 1), course(Grade::Bc, 2)];
        assert!((semester_gpa(&courses) - 3.15).abs() < f64::EPSILON);

        // (4.00×1 + 2.25×2) / 3 = 2.8333… → 2.83
        let courses = vec![course(Grade::A, 1), course(Grade::D, 2)];
        assert!((semester_gpa(&courses) - 2.83).abs() < f64::EPSILON);
    }

    #[test]
    fn cumulative_excludes_empty_semesters() {
        let semesters = vec![
            semester("1", vec![course(Grade::A, 3)]),
            semester("2", vec![]),
        ];

        let cgpa = cumulative_gpa(&semesters).expect("one semester has courses");
        assert!((cgpa - 4.00).abs() < f64::EPSILON);
    }

    #[test]
    fn cumulative_of_all_empty_semesters_is_none() {
        let semesters = vec![semester("1", vec![]), semester("2", vec![])];
        assert!(cumulative_gpa(&semesters).is_none());
        assert!(cumulative_gpa(&[]).is_none());
    }

    #[test]
    fn cumulative_is_unweighted_mean_of_semester_gpas() {
        // Semester GPAs 4.00 (1 credit) and 2.00 (10 credits) average to
        // 3.00 — NOT the ≈2.18 a credit-weighted global average would give.
        let semesters = vec![
            semester("1", vec![course(Grade::A, 1)]),
            semester("2", vec![course(Grade::E, 10)]),
        ];

        let cgpa = cumulative_gpa(&semesters).expect("both semesters count");
        assert!((cgpa - 3.00).abs() < f64::EPSILON);
    }

    #[test]
    fn classification_boundaries_are_lower_inclusive() {
        assert_eq!(Classification::from_cgpa(4.00), Classification::Distinction);
        assert_eq!(Classification::from_cgpa(3.50), Classification::Distinction);
        assert_eq!(Classification::from_cgpa(3.49), Classification::UpperCredit);
        assert_eq!(Classification::from_cgpa(3.00), Classification::UpperCredit);
        assert_eq!(Classification::from_cgpa(2.99), Classification::LowerCredit);
        assert_eq!(Classification::from_cgpa(2.50), Classification::LowerCredit);
        assert_eq!(Classification::from_cgpa(2.49), Classification::Pass);
        assert_eq!(Classification::from_cgpa(2.00), Classification::Pass);
        assert_eq!(Classification::from_cgpa(1.99), Classification::Fail);
        assert_eq!(Classification::from_cgpa(0.00), Classification::Fail);
    }

    #[test]
    fn classification_labels() {
        assert_eq!(Classification::UpperCredit.to_string(), "Upper Credit");
        assert_eq!(Classification::Fail.to_string(), "Fail");
    }

    #[test]
    fn round2_half_away_from_zero() {
        // 0.125 is exactly representable, so ×100 hits 12.5 precisely
        assert!((round2(0.125) - 0.13).abs() < f64::EPSILON);
        assert!((round2(-0.125) + 0.13).abs() < f64::EPSILON);
        assert!((round2(2.8366) - 2.84).abs() < f64::EPSILON);
        assert!((round2(3.1) - 3.1).abs() < f64::EPSILON);
    }
}
