//! Command-line interface entry point for `CgpaCalc`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_calc::config::Config;
use clap::Parser;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    let verbose = init_logging(&args, &config);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Compute {
            input_files,
            no_save,
            report,
        } => {
            commands::compute::run(&input_files, no_save, &config, verbose);

            if let Some(format) = report {
                generate_compute_reports(&input_files, &format, &config);
            }
        }
        Command::History { limit, subcommand } => {
            commands::history::run(subcommand, limit, &config);
        }
        Command::Report {
            input_file,
            output,
            format,
        } => {
            commands::report::run(&input_file, output.as_deref(), &format, &config);
        }
        Command::Grade { score } => {
            commands::grade::run(score);
        }
    }
}

/// Wire up the logger from CLI flags and config: runtime level (CLI flag
/// beats config, fallback warn), debug/verbose flags, and the optional
/// file sink. Returns the effective verbose flag.
fn init_logging(args: &Cli, config: &Config) -> bool {
    let mut level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    verbose
}

/// Render a report beside each successfully computed transcript.
fn generate_compute_reports(input_files: &[std::path::PathBuf], format: &str, config: &Config) {
    let reports_dir = std::path::PathBuf::from(&config.paths.reports_dir);
    if std::fs::create_dir_all(&reports_dir).is_err() {
        eprintln!(
            "✗ Failed to create reports directory: {}",
            reports_dir.display()
        );
        return;
    }

    for input_file in input_files {
        match commands::report::generate_from_compute(input_file, &reports_dir, format) {
            Ok(report_path) => {
                println!("✓ Report generated: {}", report_path.display());
            }
            Err(e) => {
                eprintln!("{e}");
            }
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
