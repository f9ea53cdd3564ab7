//! Data models for `CgpaCalc`

pub mod course;
pub mod record;
pub mod semester;

pub use course::Course;
pub use record::{CgpaRecord, History};
pub use semester::Semester;
