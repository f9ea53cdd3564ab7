//! Report command handler
//!
//! Generates CGPA reports in various formats (Markdown, HTML) from a
//! transcript file. The computation runs in memory; the calculation
//! history is not touched.

use cgpa_calc::config::Config;
use cgpa_calc::models::CgpaRecord;
use cgpa_calc::report::{HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator};
use cgpa_calc::session::Session;
use cgpa_calc::transcript::{parse_transcript_csv, Transcript};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to transcript CSV file
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing default output directory
pub fn run(input_file: &Path, output_file: Option<&Path>, format_str: &str, config: &Config) {
    match generate_report(input_file, output_file, format_str, config) {
        Ok(report_path) => {
            println!("✓ Report generated: {}", report_path.display());
            info!("Report exported to: {}", report_path.display());
        }
        Err(err) => {
            error!(
                "Report generation failed for {}: {err}",
                input_file.display()
            );
            eprintln!("{err}");
        }
    }
}

/// Generate a report next to the compute command's output, writing into
/// the configured reports directory. Used by `compute --report`.
///
/// # Errors
/// Returns a displayable error message on failure.
pub fn generate_from_compute(
    input_file: &Path,
    reports_dir: &Path,
    format_str: &str,
) -> Result<PathBuf, String> {
    let format = parse_format(format_str)?;
    let (transcript, record) = prepare_record(input_file)?;
    let output_path = reports_dir.join(default_file_name(input_file, format));

    write_report(&transcript, &record, format, &output_path)?;
    Ok(output_path)
}

/// Parse a transcript and run the computation in a throwaway session.
fn prepare_record(input_file: &Path) -> Result<(Transcript, CgpaRecord), String> {
    let transcript = parse_transcript_csv(input_file).map_err(|e| {
        error!("Failed to load transcript {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!("Transcript loaded: {}", input_file.display());

    let mut session = Session::new();
    for semester in &transcript.semesters {
        let semester_id = session.add_semester();
        for entry in &semester.entries {
            session.add_course_entry(
                &semester_id,
                entry.name.clone(),
                entry.grade,
                entry.credit_unit,
            );
        }
    }

    let record = session
        .compute_cgpa()
        .cloned()
        .ok_or_else(|| format!("✗ No courses to compute in {}", input_file.display()))?;

    Ok((transcript, record))
}

/// Render the record with the reporter matching `format`.
fn write_report(
    transcript: &Transcript,
    record: &CgpaRecord,
    format: ReportFormat,
    output_path: &Path,
) -> Result<(), String> {
    let ctx = ReportContext::new(
        transcript.student.as_deref(),
        transcript.session.as_deref(),
        record,
    );

    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(&ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}")),
        ReportFormat::Html => HtmlReporter::new()
            .generate(&ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}")),
    }
}

fn parse_format(format_str: &str) -> Result<ReportFormat, String> {
    ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))
}

fn default_file_name(input_file: &Path, format: ReportFormat) -> String {
    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript");
    format!("{stem}_report.{}", format.extension())
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = parse_format(format_str)?;
    let (transcript, record) = prepare_record(input_file)?;

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        reports_dir.join(default_file_name(input_file, format))
    };

    write_report(&transcript, &record, format, &final_output_path)?;
    Ok(final_output_path)
}
