//! Integration tests for configuration management

use cgpa_calc::config::{Config, ConfigOverrides};

const SAMPLE_CONFIG: &str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./data"
reports_dir = "./reports"
"#;

#[test]
fn defaults_populate_critical_fields() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty());
    assert!(!config.paths.data_dir.is_empty());
    assert!(!config.paths.reports_dir.is_empty());
}

#[test]
fn toml_round_trip_preserves_values() {
    let config = Config::from_toml(SAMPLE_CONFIG).expect("parse sample config");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.reports_dir, "./reports");

    let serialized = toml::to_string_pretty(&config).expect("serialize config");
    let reparsed = Config::from_toml(&serialized).expect("reparse config");
    assert_eq!(reparsed.logging.level, config.logging.level);
    assert_eq!(reparsed.paths.data_dir, config.paths.data_dir);
}

#[test]
fn partial_toml_uses_serde_defaults() {
    let config = Config::from_toml("[logging]\nlevel = \"error\"\n").expect("parse partial");

    assert_eq!(config.logging.level, "error");
    assert!(config.logging.file.is_empty());
    assert!(!config.logging.verbose);
    assert!(config.paths.data_dir.is_empty());
}

#[test]
fn cgpacalc_variable_expands_to_config_dir() {
    let toml_str = r#"
[logging]
file = "$CGPA_CALC/app.log"

[paths]
data_dir = "$CGPA_CALC/data"
"#;
    let config = Config::from_toml(toml_str).expect("parse with variables");

    for value in [&config.logging.file, &config.paths.data_dir] {
        assert!(value.contains("cgpacalc"), "not expanded: {value}");
        assert!(!value.contains("$CGPA_CALC"), "variable left in: {value}");
    }
}

#[test]
fn get_set_unset_round_trip() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("set verbose");
    assert!(config.logging.verbose);

    config.set("data-dir", "/elsewhere").expect("set data dir");
    assert_eq!(config.paths.data_dir, "/elsewhere");

    config.unset("level", &defaults).expect("unset level");
    assert_eq!(config.logging.level, defaults.logging.level);
}

#[test]
fn unknown_keys_and_bad_values_are_rejected() {
    let mut config = Config::from_defaults();

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.unset("unknown_key", &Config::from_defaults()).is_err());
    assert!(config.set("verbose", "maybe").is_err());
}

#[test]
fn overrides_replace_only_provided_values() {
    let mut config = Config::from_defaults();
    let original_reports_dir = config.paths.reports_dir.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("error".to_string()),
        verbose: Some(true),
        data_dir: Some("./custom_data".to_string()),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "error");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./custom_data");
    assert_eq!(config.paths.reports_dir, original_reports_dir);
}

#[test]
fn merge_defaults_fills_only_empty_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
data_dir = ""
reports_dir = ""
"#;
    let mut config = Config::from_toml(toml_str).expect("parse config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed, "empty paths should be filled from defaults");
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);
    // Populated fields are preserved
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");

    // A second merge has nothing left to do
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn display_lists_sections_and_fields() {
    let rendered = format!("{}", Config::from_defaults());

    for needle in ["[logging]", "[paths]", "level", "verbose", "data_dir"] {
        assert!(rendered.contains(needle), "missing {needle}: {rendered}");
    }
}

#[test]
fn config_paths_point_into_cgpacalc_dir() {
    let dir = Config::get_cgpacalc_dir();
    assert!(dir.to_string_lossy().contains("cgpacalc"));

    let file = Config::get_config_file_path();
    let file_str = file.to_string_lossy();
    assert!(file_str.ends_with("config.toml") || file_str.ends_with("dconfig.toml"));
    assert!(file.starts_with(dir));
}
