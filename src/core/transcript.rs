//! CSV parser for transcript data
//!
//! A transcript file has an optional metadata section, a `Courses`
//! section marker, a header row, and one row per course:
//!
//! ```csv
//! Student,Ada Lovelace
//! Session,2024/2025
//!
//! Courses,
//! Semester,Course Name,Grade,Credit Units
//! 1,Intro to Programming,A,3
//! 1,Calculus I,B,4
//! 2,Data Structures,AB,3
//! ```
//!
//! Rows are grouped into semesters by the `Semester` column, in order of
//! first appearance.

use crate::core::grades::Grade;
use std::error::Error;
use std::fs;
use std::path::Path;

/// One course row from a transcript file.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    /// Course display name (may be empty)
    pub name: String,
    /// Letter grade
    pub grade: Grade,
    /// Credit units (positive)
    pub credit_unit: u32,
}

/// One semester's worth of transcript rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSemester {
    /// Semester label as written in the file (e.g. "1", "Fall 2024")
    pub label: String,
    /// Course rows in file order
    pub entries: Vec<TranscriptEntry>,
}

/// A parsed transcript: optional metadata plus semesters in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    /// Student name from the metadata section
    pub student: Option<String>,
    /// Academic session from the metadata section
    pub session: Option<String>,
    /// Semesters in order of first appearance
    pub semesters: Vec<TranscriptSemester>,
}

/// Parse a transcript CSV file.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read, the `Courses` section or
/// header is missing, or a course row has an unknown grade or
/// non-positive credit units.
pub fn parse_transcript_csv<P: AsRef<Path>>(path: P) -> Result<Transcript, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_transcript_str(&content)
}

/// Parse transcript CSV content.
///
/// # Errors
/// Same conditions as [`parse_transcript_csv`].
pub fn parse_transcript_str(content: &str) -> Result<Transcript, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let courses_start = lines
        .iter()
        .position(|line| line.to_lowercase().starts_with("courses"))
        .ok_or("No 'Courses' section found in transcript")?;

    let mut transcript = parse_metadata(&lines[..courses_start]);

    if courses_start + 1 >= lines.len() {
        return Err("No course header found".into());
    }
    let headers = parse_csv_line(lines[courses_start + 1]);

    for (offset, line) in lines.iter().enumerate().skip(courses_start + 2) {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = offset + 1;
        let (label, entry) = parse_course_line(line, &headers)
            .map_err(|e| format!("Line {line_no}: {e}"))?;
        push_entry(&mut transcript, label, entry);
    }

    Ok(transcript)
}

/// Parse the metadata section above the `Courses` marker.
fn parse_metadata(lines: &[&str]) -> Transcript {
    let mut transcript = Transcript::default();

    for line in lines {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 2 || parts[1].is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "student" => transcript.student = Some(parts[1].to_string()),
            "session" => transcript.session = Some(parts[1].to_string()),
            _ => {}
        }
    }

    transcript
}

/// Parse a CSV line into trimmed fields.
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}

/// Look up a field by header name.
fn get_field<'a>(fields: &'a [String], name: &str, headers: &[String]) -> Option<&'a str> {
    let idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))?;
    fields.get(idx).map(String::as_str)
}

/// Parse a single course row into its semester label and entry.
fn parse_course_line(
    line: &str,
    headers: &[String],
) -> Result<(String, TranscriptEntry), Box<dyn Error>> {
    let fields = parse_csv_line(line);

    let label = get_field(&fields, "Semester", headers)
        .filter(|s| !s.is_empty())
        .ok_or("Missing semester")?
        .to_string();

    let name = get_field(&fields, "Course Name", headers)
        .unwrap_or_default()
        .to_string();

    let grade: Grade = get_field(&fields, "Grade", headers)
        .ok_or("Missing grade")?
        .parse()?;

    let credit_str = get_field(&fields, "Credit Units", headers).ok_or("Missing credit units")?;
    let credit_unit = credit_str
        .parse::<u32>()
        .map_err(|_| format!("Invalid credit units: '{credit_str}'"))?;
    if credit_unit == 0 {
        return Err("Credit units must be positive".into());
    }

    Ok((
        label,
        TranscriptEntry {
            name,
            grade,
            credit_unit,
        },
    ))
}

/// Append an entry to its semester, creating the semester on first sight.
fn push_entry(transcript: &mut Transcript, label: String, entry: TranscriptEntry) {
    if let Some(semester) = transcript.semesters.iter_mut().find(|s| s.label == label) {
        semester.entries.push(entry);
    } else {
        transcript.semesters.push(TranscriptSemester {
            label,
            entries: vec![entry],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Student,Ada Lovelace
Session,2024/2025

Courses,
Semester,Course Name,Grade,Credit Units
1,Intro to Programming,A,3
1,Calculus I,B,4
2,Data Structures,AB,3
";

    #[test]
    fn parses_metadata_and_groups_semesters() {
        let transcript = parse_transcript_str(SAMPLE).expect("parse sample");

        assert_eq!(transcript.student.as_deref(), Some("Ada Lovelace"));
        assert_eq!(transcript.session.as_deref(), Some("2024/2025"));
        assert_eq!(transcript.semesters.len(), 2);

        let first = &transcript.semesters[0];
        assert_eq!(first.label, "1");
        assert_eq!(first.entries.len(), 2);
        assert_eq!(first.entries[0].name, "Intro to Programming");
        assert_eq!(first.entries[0].grade, Grade::A);
        assert_eq!(first.entries[0].credit_unit, 3);

        let second = &transcript.semesters[1];
        assert_eq!(second.label, "2");
        assert_eq!(second.entries[0].grade, Grade::Ab);
    }

    #[test]
    fn metadata_is_optional() {
        let content = "\
Courses,
Semester,Course Name,Grade,Credit Units
1,Algebra,C,2
";
        let transcript = parse_transcript_str(content).expect("parse minimal");

        assert!(transcript.student.is_none());
        assert!(transcript.session.is_none());
        assert_eq!(transcript.semesters.len(), 1);
    }

    #[test]
    fn header_order_does_not_matter() {
        let content = "\
Courses,
Grade,Credit Units,Semester,Course Name
BC,5,Fall 2024,Linear Algebra
";
        let transcript = parse_transcript_str(content).expect("parse reordered");

        let entry = &transcript.semesters[0].entries[0];
        assert_eq!(transcript.semesters[0].label, "Fall 2024");
        assert_eq!(entry.name, "Linear Algebra");
        assert_eq!(entry.grade, Grade::Bc);
        assert_eq!(entry.credit_unit, 5);
    }

    #[test]
    fn missing_courses_section_is_an_error() {
        let err = parse_transcript_str("Student,Someone\n").expect_err("no section");
        assert!(err.to_string().contains("Courses"));
    }

    #[test]
    fn unknown_grade_is_an_error_with_line_number() {
        let content = "\
Courses,
Semester,Course Name,Grade,Credit Units
1,Algebra,Z,2
";
        let err = parse_transcript_str(content).expect_err("bad grade");
        let msg = err.to_string();
        assert!(msg.contains("Line 3"), "message was: {msg}");
        assert!(msg.contains('Z'));
    }

    #[test]
    fn zero_credit_units_is_an_error() {
        let content = "\
Courses,
Semester,Course Name,Grade,Credit Units
1,Algebra,A,0
";
        let err = parse_transcript_str(content).expect_err("zero credits");
        assert!(err.to_string().contains("positive"));
    }
}
