//! CGPA record and calculation history

use crate::core::models::Semester;
use serde::{Deserialize, Serialize};

/// Snapshot of one cumulative computation: the non-empty semesters at the
/// moment of computation plus the resulting CGPA. Never mutated after
/// being appended to the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgpaRecord {
    /// Semesters included in the computation, each with its computed GPA
    pub semesters: Vec<Semester>,

    /// Cumulative GPA (unweighted mean of semester GPAs)
    pub cgpa: f64,
}

impl CgpaRecord {
    /// Create a record from computed semesters and their cumulative GPA
    #[must_use]
    pub const fn new(semesters: Vec<Semester>, cgpa: f64) -> Self {
        Self { semesters, cgpa }
    }

    /// Number of semesters captured in this record
    #[must_use]
    pub const fn semester_count(&self) -> usize {
        self.semesters.len()
    }
}

/// Append-only ordered sequence of CGPA records.
///
/// Serialized as a flat JSON array; the whole sequence is rewritten on
/// every successful computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    /// Records in computation order, oldest first
    pub records: Vec<CgpaRecord>,
}

impl History {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: CgpaRecord) {
        self.records.push(record);
    }

    /// Number of records
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history has no records
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record, if any
    #[must_use]
    pub fn latest(&self) -> Option<&CgpaRecord> {
        self.records.last()
    }
}
