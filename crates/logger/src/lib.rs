//! Lightweight logger crate with feature-gated levels.
//! - `log-info` enables `info!` output (enabled by default).
//! - `log-debug` enables `debug!` output and a runtime debug flag.
//! - `verbose` enables `verbose!` output, a simple printer with no tags.
//! - `file-logging` enables writing log messages to a file (verbose does NOT go to file).
//! - `warn!` and `error!` are always active.
//!
//! Warnings and errors go to stderr, everything else to stdout. Once a
//! log file is initialized, tagged messages are redirected there instead
//! of the console.

use std::fmt::Arguments;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Logging levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Warning-level messages (always enabled).
    Warn = 2,
    /// Info-level messages (requires `log-info` feature).
    Info = 3,
    /// Debug-level messages (requires `log-debug` feature and runtime flag).
    Debug = 4,
}

impl Level {
    /// Console tag for this level (e.g. `[ERROR]`).
    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Whether this level's messages belong on stderr.
    const fn to_stderr(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }

    /// Whether the crate was built with support for this level.
    const fn compiled_in(self) -> bool {
        match self {
            Self::Error | Self::Warn => true,
            Self::Info => cfg!(feature = "log-info"),
            Self::Debug => cfg!(feature = "log-debug"),
        }
    }
}

/// Default runtime level, derived from the enabled features.
const fn default_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

/// Current runtime log level.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level());
/// Runtime flag controlling whether `debug!` messages should emit.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);
/// Runtime flag controlling whether `verbose!` output should emit.
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
/// Log file handle, set once file logging is initialized.
#[cfg(feature = "file-logging")]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse and set level from a string (case-insensitive). Returns true on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "error" | "err" => Level::Error,
        "warn" | "warning" => Level::Warn,
        "info" => Level::Info,
        "debug" => Level::Debug,
        _ => return false,
    };
    set_level(parsed);
    true
}

/// Enable debug logging at runtime (no effect unless `log-debug` is compiled in).
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging at runtime.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether debug logging is enabled (false if `log-debug` is disabled).
#[must_use]
pub fn is_debug_enabled() -> bool {
    cfg!(feature = "log-debug") && DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Enable verbose output at runtime (no effect unless `verbose` is compiled in).
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable verbose output at runtime.
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether verbose output is enabled (false if `verbose` is disabled).
#[must_use]
pub fn is_verbose_enabled() -> bool {
    cfg!(feature = "verbose") && VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Initialize file logging to the specified path.
/// Returns true on success, false on failure.
///
/// # Panics
///
/// Panics if the `LOG_FILE` mutex is poisoned.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok_and(|file| {
            *LOG_FILE.lock().unwrap() = Some(file);
            true
        })
}

/// Initialize file logging to the specified path.
/// Returns true on success, false on failure.
#[cfg(not(feature = "file-logging"))]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

/// Write a tagged message to the log file if one is active.
/// Returns true when the message was consumed by the file sink.
#[cfg(feature = "file-logging")]
fn sink_to_file(tag: &str, msg: &str) -> bool {
    let Ok(mut guard) = LOG_FILE.lock() else {
        return false;
    };
    let Some(file) = guard.as_mut() else {
        return false;
    };
    let _ = writeln!(file, "{tag} {msg}");
    let _ = file.flush();
    true
}

#[cfg(not(feature = "file-logging"))]
fn sink_to_file(_tag: &str, _msg: &str) -> bool {
    false
}

/// Decide whether a message at `level` should be emitted: the level must
/// be compiled in, at or below the runtime level, and (for debug) the
/// runtime debug flag must be set.
fn should_log(level: Level) -> bool {
    if !level.compiled_in() {
        return false;
    }
    if level == Level::Debug && !is_debug_enabled() {
        return false;
    }
    (level as u8) <= LOG_LEVEL.load(Ordering::SeqCst)
}

/// Internal logging dispatch used by the public macros.
///
/// Messages are suppressed when `should_log(level)` is false; otherwise
/// they go to the file sink when active, else to the console.
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }

    let msg = args.to_string();
    let tag = level.tag();

    if sink_to_file(tag, &msg) {
        return;
    }

    if level.to_stderr() {
        eprintln!("{tag} {msg}");
    } else {
        println!("{tag} {msg}");
    }
}

/// Public logging macros (always available; respect feature/runtime gating).
#[macro_export]
/// Logs an error-level message (always enabled). Emits to stderr.
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a warning-level message (always enabled). Emits to stderr.
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs an info-level message (requires `log-info` feature).
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a debug-level message (requires `log-debug` feature and runtime enablement).
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
/// Prints a verbose message (requires `verbose` feature and runtime enablement).
/// This is a simple printer with no tags, and does NOT go to log files.
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose")]
        {
            if $crate::is_verbose_enabled() {
                println!($($arg)*);
            }
        }
    };
}
