//! Core module: the GPA/CGPA engine and everything the CLI builds on

pub mod config;
pub mod engine;
pub mod grades;
pub mod models;
pub mod report;
pub mod session;
pub mod store;
pub mod transcript;

/// Returns the current version of the `CgpaCalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
