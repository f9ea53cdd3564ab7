//! Markdown report generator
//!
//! Generates CGPA reports in Markdown format. These reports render well
//! in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{student}}", ctx.student_name());
        output = output.replace("{{session}}", ctx.session_label());
        output = output.replace("{{cgpa}}", &format!("{:.2}", ctx.record.cgpa));
        output = output.replace("{{classification}}", ctx.classification().label());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{total_credits}}", &ctx.total_credit_units().to_string());

        let tables = Self::generate_semester_tables(ctx);
        output = output.replace("{{semester_tables}}", &tables);

        output
    }

    /// Generate one course table per semester
    fn generate_semester_tables(ctx: &ReportContext) -> String {
        let mut tables = String::new();

        for (index, semester) in ctx.record.semesters.iter().enumerate() {
            let _ = writeln!(
                tables,
                "### Semester {} — GPA {:.2}\n",
                index + 1,
                semester.gpa
            );
            tables.push_str("| Course | Grade | Credit Units |\n");
            tables.push_str("|---|---|---|\n");

            for course in &semester.courses {
                let name = if course.name.is_empty() {
                    "—"
                } else {
                    course.name.as_str()
                };
                let _ = writeln!(
                    tables,
                    "| {} | {} | {} |",
                    name, course.grade, course.credit_unit
                );
            }
            tables.push('\n');
        }

        tables
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::Grade;
    use crate::core::models::{CgpaRecord, Course, Semester};

    fn sample_record() -> CgpaRecord {
        let mut semester = Semester::new("1".to_string());
        semester.add_course(Course::new(
            "1".to_string(),
            "Calculus I".to_string(),
            Grade::A,
            3,
        ));
        semester.gpa = 4.0;
        CgpaRecord::new(vec![semester], 4.0)
    }

    #[test]
    fn renders_summary_and_tables() {
        let record = sample_record();
        let ctx = ReportContext::new(Some("Ada Lovelace"), Some("2024/2025"), &record);

        let output = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(output.contains("# CGPA Report — Ada Lovelace"));
        assert!(output.contains("| 4.00 | Distinction |"));
        assert!(output.contains("### Semester 1 — GPA 4.00"));
        assert!(output.contains("| Calculus I | A | 3 |"));
        assert!(!output.contains("{{"), "unsubstituted placeholder left");
    }

    #[test]
    fn empty_course_names_render_as_dash() {
        let mut record = sample_record();
        record.semesters[0].courses[0].name = String::new();
        let ctx = ReportContext::new(None, None, &record);

        let output = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(output.contains("| — | A | 3 |"));
    }
}
