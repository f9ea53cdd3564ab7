//! Calculator session state
//!
//! The explicit state container the CLI (or any other front end) owns:
//! the in-memory semester list, the current cumulative GPA, and the
//! calculation history. All mutation goes through the operations below;
//! persisting the history is the caller's boundary call after a
//! successful computation.

use crate::core::engine::{cumulative_gpa, semester_gpa};
use crate::core::grades::Grade;
use crate::core::models::{CgpaRecord, Course, History, Semester};

/// Field-wise edit applied to a course in place.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseUpdate {
    /// Replace the display name
    Name(String),
    /// Replace the letter grade
    Grade(Grade),
    /// Replace the credit units
    CreditUnit(u32),
}

/// A calculator session: semesters under edit, the current CGPA, and the
/// append-only history of past computations.
#[derive(Debug, Clone)]
pub struct Session {
    semesters: Vec<Semester>,
    cgpa: f64,
    history: History,
    next_semester_id: u64,
    next_course_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with a single empty semester and no history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Create a session seeded with a previously persisted history.
    #[must_use]
    pub fn with_history(history: History) -> Self {
        let mut session = Self {
            semesters: Vec::new(),
            cgpa: 0.0,
            history,
            next_semester_id: 0,
            next_course_id: 0,
        };
        session.add_semester();
        session
    }

    /// Semesters currently under edit
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Current cumulative GPA (0 until computed)
    #[must_use]
    pub const fn cgpa(&self) -> f64 {
        self.cgpa
    }

    /// Calculation history, oldest first
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Append a new, empty semester and return its id.
    pub fn add_semester(&mut self) -> String {
        self.next_semester_id += 1;
        let id = self.next_semester_id.to_string();
        self.semesters.push(Semester::new(id.clone()));
        id
    }

    /// Remove a semester by id. The last remaining semester is never
    /// removed.
    ///
    /// # Returns
    /// `true` if the semester was removed
    pub fn delete_semester(&mut self, semester_id: &str) -> bool {
        if self.semesters.len() <= 1 {
            return false;
        }
        if let Some(pos) = self.semesters.iter().position(|s| s.id == semester_id) {
            self.semesters.remove(pos);
            true
        } else {
            false
        }
    }

    /// Add a course row to a semester with default values (empty name,
    /// grade A, one credit unit) and return its id.
    ///
    /// # Returns
    /// The new course id, or `None` if no semester has that id
    pub fn add_course(&mut self, semester_id: &str) -> Option<String> {
        let semester = self.semesters.iter_mut().find(|s| s.id == semester_id)?;

        self.next_course_id += 1;
        let id = self.next_course_id.to_string();
        semester.add_course(Course::new(id.clone(), String::new(), Grade::A, 1));
        Some(id)
    }

    /// Add a fully specified course to a semester and return its id.
    ///
    /// # Returns
    /// The new course id, or `None` if no semester has that id
    pub fn add_course_entry(
        &mut self,
        semester_id: &str,
        name: String,
        grade: Grade,
        credit_unit: u32,
    ) -> Option<String> {
        let semester = self.semesters.iter_mut().find(|s| s.id == semester_id)?;

        self.next_course_id += 1;
        let id = self.next_course_id.to_string();
        semester.add_course(Course::new(id.clone(), name, grade, credit_unit));
        Some(id)
    }

    /// Edit one field of a course in place.
    ///
    /// # Returns
    /// `true` if the course was found and updated
    pub fn update_course(
        &mut self,
        semester_id: &str,
        course_id: &str,
        update: CourseUpdate,
    ) -> bool {
        let Some(semester) = self.semesters.iter_mut().find(|s| s.id == semester_id) else {
            return false;
        };
        let Some(course) = semester.course_mut(course_id) else {
            return false;
        };

        match update {
            CourseUpdate::Name(name) => course.name = name,
            CourseUpdate::Grade(grade) => course.grade = grade,
            CourseUpdate::CreditUnit(units) => course.credit_unit = units,
        }
        true
    }

    /// Remove a course from a semester.
    ///
    /// # Returns
    /// `true` if the course was removed
    pub fn delete_course(&mut self, semester_id: &str, course_id: &str) -> bool {
        self.semesters
            .iter_mut()
            .find(|s| s.id == semester_id)
            .is_some_and(|s| s.remove_course(course_id))
    }

    /// Run the cumulative computation over the current semesters.
    ///
    /// Semesters without courses are excluded; if none remain the call is
    /// a no-op and returns `None`, leaving CGPA, semesters, and history
    /// untouched. On success the semester list is replaced by the
    /// computed (non-empty) semesters, the CGPA updates, and one
    /// immutable record is appended to the history.
    pub fn compute_cgpa(&mut self) -> Option<&CgpaRecord> {
        let cgpa = cumulative_gpa(&self.semesters)?;

        let computed: Vec<Semester> = self
            .semesters
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| {
                let mut semester = s.clone();
                semester.gpa = semester_gpa(&semester.courses);
                semester
            })
            .collect();

        self.semesters = computed.clone();
        self.cgpa = cgpa;
        self.history.push(CgpaRecord::new(computed, cgpa));

        self.history.latest()
    }

    /// Reset the calculator to a single empty semester and CGPA 0.
    /// History is retained.
    pub fn reset(&mut self) {
        self.semesters.clear();
        self.cgpa = 0.0;
        self.add_semester();
    }
}
