//! Course model

use crate::core::grades::Grade;
use serde::{Deserialize, Serialize};

/// A single graded course entry within a semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Opaque identifier, unique within a session
    pub id: String,

    /// Display name (free text, may be empty)
    pub name: String,

    /// Letter grade earned
    pub grade: Grade,

    /// Credit units (positive integer, conventionally 1–6)
    pub credit_unit: u32,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Opaque identifier
    /// * `name` - Display name
    /// * `grade` - Letter grade
    /// * `credit_unit` - Credit units
    #[must_use]
    pub const fn new(id: String, name: String, grade: Grade, credit_unit: u32) -> Self {
        Self {
            id,
            name,
            grade,
            credit_unit,
        }
    }

    /// Grade points earned for this course (points × credit units)
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.grade.points() * f64::from(self.credit_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("1".to_string(), "Calculus I".to_string(), Grade::A, 4);

        assert_eq!(course.id, "1");
        assert_eq!(course.name, "Calculus I");
        assert_eq!(course.grade, Grade::A);
        assert_eq!(course.credit_unit, 4);
    }

    #[test]
    fn test_quality_points() {
        let course = Course::new("1".to_string(), "Physics".to_string(), Grade::Ab, 3);
        assert!((course.quality_points() - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quality_points_for_fail() {
        let course = Course::new("2".to_string(), "Chemistry".to_string(), Grade::F, 6);
        assert!(course.quality_points().abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_round_trip() {
        let course = Course::new("7".to_string(), "Algorithms".to_string(), Grade::Bc, 3);
        let json = serde_json::to_string(&course).expect("serialize course");
        assert!(json.contains("\"BC\""));

        let back: Course = serde_json::from_str(&json).expect("deserialize course");
        assert_eq!(back, course);
    }
}
