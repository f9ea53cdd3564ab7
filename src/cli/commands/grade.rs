//! Grade command handler

use cgpa_calc::grades::Grade;

/// Convert a numeric score in [0, 100] to a letter grade and print it.
pub fn run(score: f64) {
    if !(0.0..=100.0).contains(&score) {
        eprintln!("✗ Score must be between 0 and 100 (got {score})");
        std::process::exit(1);
    }

    let grade = Grade::from_score(score);
    println!("Score {score} → Grade {grade} ({:.2} points)", grade.points());
}
