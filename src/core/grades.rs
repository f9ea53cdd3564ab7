//! Letter grades and the fixed grade-point table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of letter grades the calculator understands.
///
/// Point values form a fixed, process-wide table; callers that accept
/// grade symbols from text (transcripts, CLI arguments) go through
/// [`FromStr`], which rejects anything outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    /// A — 4.00 points
    A,
    /// AB — 3.50 points
    Ab,
    /// B — 3.25 points
    B,
    /// BC — 3.10 points
    Bc,
    /// C — 2.75 points
    C,
    /// CD — 2.50 points
    Cd,
    /// D — 2.25 points
    D,
    /// E — 2.00 points
    E,
    /// F — 0.00 points
    F,
}

/// All grades in descending point order, as shown in grade selectors.
pub const ALL_GRADES: [Grade; 9] = [
    Grade::A,
    Grade::Ab,
    Grade::B,
    Grade::Bc,
    Grade::C,
    Grade::Cd,
    Grade::D,
    Grade::E,
    Grade::F,
];

impl Grade {
    /// Grade-point value for this grade, in [0.00, 4.00].
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.00,
            Self::Ab => 3.50,
            Self::B => 3.25,
            Self::Bc => 3.10,
            Self::C => 2.75,
            Self::Cd => 2.50,
            Self::D => 2.25,
            Self::E => 2.00,
            Self::F => 0.00,
        }
    }

    /// Convert a numeric score in [0, 100] to a letter grade.
    ///
    /// Utility conversion, not used by the GPA computation itself.
    /// Evaluated as a descending threshold ladder; any score below 40
    /// (including out-of-range negatives) maps to F.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 75.0 => Self::A,
            s if s >= 70.0 => Self::Ab,
            s if s >= 65.0 => Self::B,
            s if s >= 60.0 => Self::Bc,
            s if s >= 55.0 => Self::C,
            s if s >= 50.0 => Self::Cd,
            s if s >= 45.0 => Self::D,
            s if s >= 40.0 => Self::E,
            _ => Self::F,
        }
    }

    /// The grade symbol as written in transcripts (e.g. "AB").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ab => "AB",
            Self::B => "B",
            Self::Bc => "BC",
            Self::C => "C",
            Self::Cd => "CD",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AB" => Ok(Self::Ab),
            "B" => Ok(Self::B),
            "BC" => Ok(Self::Bc),
            "C" => Ok(Self::C),
            "CD" => Ok(Self::Cd),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            other => Err(format!("Unknown grade symbol: '{other}'")),
        }
    }
}
