//! Tests for verbose and file-logging features.

use logger::{enable_verbose, error, info, is_verbose_enabled, verbose, warn};

#[cfg(feature = "verbose")]
#[test]
fn verbose_is_silent_until_enabled() {
    // Not asserted off here: the file-logging test shares the global flag
    verbose!("This may not appear");

    enable_verbose();
    assert!(is_verbose_enabled());
    verbose!("This should appear: verbose test {}", 42);
}

#[cfg(feature = "file-logging")]
#[test]
fn tagged_messages_divert_to_the_log_file() {
    use logger::init_file_logging;
    use std::fs;

    let log_path = std::env::temp_dir().join("cgpacalc_logger_test.log");
    let _ = fs::remove_file(&log_path);

    assert!(init_file_logging(&log_path));

    info!("file info message");
    warn!("file warning message");
    error!("file error message");

    // Verbose output is console-only even with a file sink active
    #[cfg(feature = "verbose")]
    {
        enable_verbose();
        verbose!("console-only verbose message");
    }

    let contents = fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("[INFO] file info message"));
    assert!(contents.contains("[WARN] file warning message"));
    assert!(contents.contains("[ERROR] file error message"));
    assert!(!contents.contains("verbose message"));

    let _ = fs::remove_file(&log_path);
}
