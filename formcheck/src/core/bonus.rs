//! Bonus calculation keyed by performance level.
//!
//! The level set is closed, so dispatch is an enum match rather than a
//! string-keyed table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceLevel {
    S,
    A,
    B,
}

impl PerformanceLevel {
    pub const ALL: [PerformanceLevel; 3] = [Self::S, Self::A, Self::B];

    /// Salary multiplier for this level.
    pub fn multiplier(self) -> u64 {
        match self {
            Self::S => 4,
            Self::A => 3,
            Self::B => 2,
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown performance level '{0}' (expected S, A, or B)")]
pub struct LevelError(pub String);

impl FromStr for PerformanceLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            other => Err(LevelError(other.to_string())),
        }
    }
}

/// `salary * level.multiplier()`, or `None` on overflow.
pub fn calculate_bonus(level: PerformanceLevel, salary: u64) -> Option<u64> {
    salary.checked_mul(level.multiplier())
}
