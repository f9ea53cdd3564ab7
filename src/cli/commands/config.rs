//! Config command handler

use crate::args::ConfigSubcommand;
use cgpa_calc::config::Config;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_one(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_and_save(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_and_save(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_with_confirmation(),
    }
}

/// Print all configuration values
fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
}

/// Print a single configuration value
fn show_one(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => eprintln!("Unknown config key: '{key}'"),
    }
}

/// Update a configuration value and persist the config file
fn set_and_save(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    save_or_exit(config);
    println!("✓ Set {key} = {value}");
}

/// Restore a configuration value to its default and persist the config file
fn unset_and_save(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    save_or_exit(config);
    println!("✓ Reset {key} to default");
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Delete the config file after confirmation
fn reset_with_confirmation() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if super::confirm("Are you sure you want to reset config to defaults?") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
