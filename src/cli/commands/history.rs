//! History command handler

use crate::args::HistorySubcommand;
use cgpa_calc::config::Config;
use cgpa_calc::engine::Classification;
use cgpa_calc::models::History;
use cgpa_calc::store::HistoryStore;
use logger::error;
use std::path::PathBuf;

/// Dispatch history subcommands
pub fn run(subcommand: Option<HistorySubcommand>, limit: Option<usize>, config: &Config) {
    let store = match HistoryStore::new(PathBuf::from(&config.paths.data_dir)) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open history store: {e}");
            eprintln!("✗ Failed to open history store: {e}");
            return;
        }
    };

    match subcommand {
        None => show(&store.load(), limit),
        Some(HistorySubcommand::Clear) => clear_with_confirmation(&store),
    }
}

/// Print stored calculations, oldest first.
fn show(history: &History, limit: Option<usize>) {
    if history.is_empty() {
        println!("No calculation history yet.");
        return;
    }

    let total = history.len();
    let skip = limit.map_or(0, |n| total.saturating_sub(n));

    println!("\n=== CGPA History ({total} calculations) ===\n");
    for (index, record) in history.records.iter().enumerate().skip(skip) {
        let classification = Classification::from_cgpa(record.cgpa);
        let courses: usize = record.semesters.iter().map(|s| s.courses.len()).sum();
        println!(
            "Calculation {}: CGPA {:.2} — {} ({} semesters, {} courses)",
            index + 1,
            record.cgpa,
            classification,
            record.semester_count(),
            courses
        );
    }
}

/// Delete the stored history after confirmation.
fn clear_with_confirmation(store: &HistoryStore) {
    if store.load().is_empty() {
        println!("✓ History is already empty");
        return;
    }

    if super::confirm("Are you sure you want to delete the calculation history?") {
        if let Err(e) = store.clear() {
            error!("Failed to clear history: {e}");
            eprintln!("Failed to clear history: {e}");
            std::process::exit(1);
        }
        println!("✓ History cleared");
    } else {
        println!("✗ Clear cancelled");
    }
}
