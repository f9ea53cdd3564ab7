//! Integration tests for the `logger` crate

use logger::{debug, error, info, warn};
use logger::{is_debug_enabled, set_level, set_level_from_str, Level};

#[test]
fn level_strings_parse_case_insensitively() {
    for name in ["error", "err", "WARN", "warning", "Info", "debug"] {
        assert!(set_level_from_str(name), "should accept {name}");
    }
}

#[test]
fn unknown_level_strings_are_rejected() {
    for name in ["invalid", "", "trace", "verbose"] {
        assert!(!set_level_from_str(name), "should reject {name}");
    }
}

#[test]
fn all_macros_emit_without_panicking() {
    set_level(Level::Debug);
    error!("error integration {}", 1);
    warn!("warn integration {}", 2);
    info!("info integration {}", 3);
    debug!("debug integration {}", 4);
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_flag_toggles_at_runtime() {
    use logger::{disable_debug, enable_debug};

    set_level(Level::Debug);
    disable_debug();
    assert!(!is_debug_enabled());
    debug!("suppressed");

    enable_debug();
    assert!(is_debug_enabled());
    debug!("emitted");
}

#[cfg(not(feature = "log-debug"))]
#[test]
fn debug_is_off_without_the_feature() {
    assert!(!is_debug_enabled());
}
