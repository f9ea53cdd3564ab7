//! CLI command handlers for `CgpaCalc`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod compute;
pub mod config;
pub mod grade;
pub mod history;
pub mod report;

use std::io::{self, Write};

/// Ask the user a yes/no question on stdout and read the answer.
///
/// Accepts `y`/`yes` (case-insensitive) as confirmation; anything else
/// declines.
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
