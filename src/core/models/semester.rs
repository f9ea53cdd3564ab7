//! Semester model

use crate::core::models::Course;
use serde::{Deserialize, Serialize};

/// An ordered collection of courses with a derived GPA.
///
/// The GPA is 0 until a computation pass has run over a non-empty course
/// list; a stored 0 means "not yet computed", not a numeric result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Opaque identifier, unique within a session
    pub id: String,

    /// Courses in entry order
    pub courses: Vec<Course>,

    /// Derived semester GPA (0 until computed)
    pub gpa: f64,
}

impl Semester {
    /// Create a new, empty semester
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self {
            id,
            courses: Vec::new(),
            gpa: 0.0,
        }
    }

    /// Append a course
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Remove a course by id
    ///
    /// # Returns
    /// `true` if the course was removed, `false` if no course had that id
    pub fn remove_course(&mut self, course_id: &str) -> bool {
        if let Some(pos) = self.courses.iter().position(|c| c.id == course_id) {
            self.courses.remove(pos);
            true
        } else {
            false
        }
    }

    /// Find a course by id
    #[must_use]
    pub fn course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }

    /// Whether this semester has any courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total credit units across all courses
    #[must_use]
    pub fn total_credit_units(&self) -> u32 {
        self.courses.iter().map(|c| c.credit_unit).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::Grade;

    fn course(id: &str, grade: Grade, credits: u32) -> Course {
        Course::new(id.to_string(), String::new(), grade, credits)
    }

    #[test]
    fn test_new_semester_is_empty() {
        let semester = Semester::new("1".to_string());

        assert_eq!(semester.id, "1");
        assert!(semester.is_empty());
        assert!(semester.gpa.abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_and_remove_course() {
        let mut semester = Semester::new("1".to_string());
        semester.add_course(course("c1", Grade::A, 3));
        semester.add_course(course("c2", Grade::B, 2));

        assert_eq!(semester.courses.len(), 2);
        assert!(semester.remove_course("c1"));
        assert_eq!(semester.courses.len(), 1);

        // Removing again should return false
        assert!(!semester.remove_course("c1"));
    }

    #[test]
    fn test_course_mut_edits_in_place() {
        let mut semester = Semester::new("1".to_string());
        semester.add_course(course("c1", Grade::A, 3));

        let entry = semester.course_mut("c1").expect("course exists");
        entry.credit_unit = 5;

        assert_eq!(semester.courses[0].credit_unit, 5);
        assert!(semester.course_mut("missing").is_none());
    }

    #[test]
    fn test_total_credit_units() {
        let mut semester = Semester::new("1".to_string());
        semester.add_course(course("c1", Grade::A, 3));
        semester.add_course(course("c2", Grade::F, 1));

        assert_eq!(semester.total_credit_units(), 4);
    }
}
