//! HTML report generator
//!
//! Generates CGPA reports as self-contained HTML with embedded CSS.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{student}}", ctx.student_name());
        output = output.replace("{{session}}", ctx.session_label());
        output = output.replace("{{cgpa}}", &format!("{:.2}", ctx.record.cgpa));
        output = output.replace("{{classification}}", ctx.classification().label());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{total_credits}}", &ctx.total_credit_units().to_string());

        let sections = Self::generate_semester_sections(ctx);
        output = output.replace("{{semester_sections}}", &sections);

        output
    }

    /// Generate one table section per semester
    fn generate_semester_sections(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for (index, semester) in ctx.record.semesters.iter().enumerate() {
            let _ = writeln!(
                html,
                "<h2>Semester {} <span class=\"gpa\">GPA {:.2}</span></h2>",
                index + 1,
                semester.gpa
            );
            html.push_str("<table>\n");
            html.push_str("<tr><th>Course</th><th>Grade</th><th>Credit Units</th></tr>\n");

            for course in &semester.courses {
                let name = if course.name.is_empty() {
                    "—"
                } else {
                    course.name.as_str()
                };
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    name, course.grade, course.credit_unit
                );
            }
            html.push_str("</table>\n");
        }

        html
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
