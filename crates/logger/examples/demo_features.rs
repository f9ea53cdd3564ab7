//! Example demonstrating the verbose and file-logging features

use logger::{
    debug, enable_debug, enable_verbose, error, info, init_file_logging, set_level, verbose, warn,
    Level,
};

fn main() {
    println!("=== Logger Feature Demo ===\n");

    // Set log level to Debug
    set_level(Level::Debug);
    enable_debug();

    // Initialize file logging
    let log_file = std::env::temp_dir().join("logger_demo.log");
    if init_file_logging(&log_file) {
        println!("✓ File logging enabled at: {}\n", log_file.display());
    } else {
        println!("✗ Failed to initialize file logging\n");
    }

    // Enable verbose output
    enable_verbose();
    println!("✓ Verbose output enabled\n");

    println!("--- Standard Log Messages (these go to file ONLY) ---");
    error!("This is an error message");
    warn!("This is a warning message");
    info!("This is an info message");
    debug!("This is a debug message");

    println!("\n--- Verbose Output (console only, NOT in file) ---");
    verbose!("Loading transcript 1 of 3");
    verbose!("Loading transcript 2 of 3");
    verbose!("Loading transcript 3 of 3");
    verbose!("Computing semester GPAs...");
    verbose!("Computing cumulative CGPA...");
    verbose!("Done!");

    println!("\n--- Check the log file ---");
    println!("Run: cat {}", log_file.display());
    println!("The log file will contain error/warn/info/debug messages but NOT verbose output.");
}
