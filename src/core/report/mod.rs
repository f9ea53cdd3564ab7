//! Report generation module for CGPA results
//!
//! Renders a computed CGPA record in various formats (Markdown, HTML)
//! for sharing outside the calculator.

pub mod formats;

use crate::core::engine::Classification;
use crate::core::models::CgpaRecord;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything needed to render one computation result,
/// providing a single source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student name, when the transcript carried one
    pub student: Option<&'a str>,
    /// Academic session, when the transcript carried one
    pub session: Option<&'a str>,
    /// The computed record being reported
    pub record: &'a CgpaRecord,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        student: Option<&'a str>,
        session: Option<&'a str>,
        record: &'a CgpaRecord,
    ) -> Self {
        Self {
            student,
            session,
            record,
        }
    }

    /// Student name or a placeholder
    #[must_use]
    pub fn student_name(&self) -> &str {
        self.student.unwrap_or("Student")
    }

    /// Session label or a placeholder
    #[must_use]
    pub fn session_label(&self) -> &str {
        self.session.unwrap_or("—")
    }

    /// Classification band for the record's CGPA
    #[must_use]
    pub fn classification(&self) -> Classification {
        Classification::from_cgpa(self.record.cgpa)
    }

    /// Number of semesters in the record
    #[must_use]
    pub const fn semester_count(&self) -> usize {
        self.record.semesters.len()
    }

    /// Total number of courses across all semesters
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.record.semesters.iter().map(|s| s.courses.len()).sum()
    }

    /// Total credit units across all semesters
    #[must_use]
    pub fn total_credit_units(&self) -> u32 {
        self.record
            .semesters
            .iter()
            .map(crate::core::models::Semester::total_credit_units)
            .sum()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
