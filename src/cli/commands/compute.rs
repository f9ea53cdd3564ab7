//! Compute command handler

use cgpa_calc::config::Config;
use cgpa_calc::engine::Classification;
use cgpa_calc::session::Session;
use cgpa_calc::store::HistoryStore;
use cgpa_calc::transcript::{parse_transcript_csv, Transcript};
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Run the compute command for one or more transcript files.
///
/// Each file is computed as its own calculation; successful computations
/// are appended to the shared history and persisted unless `no_save` is
/// set.
///
/// # Arguments
/// * `input_files` - Paths to transcript CSV files
/// * `no_save` - Skip the persistence boundary call
/// * `config` - Configuration containing the history data directory
/// * `verbose` - Whether to show per-semester detail
pub fn run(input_files: &[PathBuf], no_save: bool, config: &Config, verbose: bool) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    let store = match HistoryStore::new(PathBuf::from(&config.paths.data_dir)) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open history store: {e}");
            eprintln!("✗ Failed to open history store: {e}");
            return;
        }
    };

    let mut session = Session::with_history(store.load());

    for input_file in input_files {
        match compute_single(input_file, &mut session, verbose) {
            Ok(()) => {
                if !no_save {
                    if let Err(e) = store.save(session.history()) {
                        error!("Failed to persist history: {e}");
                        eprintln!("✗ Failed to persist history: {e}");
                    }
                }
            }
            Err(err) => {
                error!("Compute failed for {}: {err}", input_file.display());
                eprintln!("{err}");
            }
        }
    }
}

/// Load one transcript into the session and run the computation.
fn compute_single(input_file: &Path, session: &mut Session, verbose: bool) -> Result<(), String> {
    let transcript = parse_transcript_csv(input_file).map_err(|e| {
        error!("Failed to load transcript {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    if verbose {
        println!(
            "✓ Transcript loaded successfully from: {}",
            input_file.display()
        );
    } else {
        info!("Transcript loaded: {}", input_file.display());
    }

    load_into_session(&transcript, session);

    let Some(record) = session.compute_cgpa() else {
        return Err(format!(
            "✗ No courses to compute in {}",
            input_file.display()
        ));
    };

    let cgpa = record.cgpa;
    let classification = Classification::from_cgpa(cgpa);

    if verbose {
        let student = transcript.student.as_deref().unwrap_or("Student");
        println!("\n=== CGPA Summary for {student} ===");
        for (index, semester) in record.semesters.iter().enumerate() {
            println!(
                "Semester {}: GPA {:.2} ({} courses, {} credit units)",
                index + 1,
                semester.gpa,
                semester.courses.len(),
                semester.total_credit_units()
            );
        }
    }

    println!("CGPA: {cgpa:.2}");
    println!("Classification: {classification}");
    info!("Computed CGPA {cgpa:.2} for {}", input_file.display());

    Ok(())
}

/// Reset the session's working semesters and fill them from a transcript.
/// The calculation history carried by the session is untouched.
fn load_into_session(transcript: &Transcript, session: &mut Session) {
    session.reset();

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
}
