use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Estimated language-learning difficulty of a text sample.
///
/// `Unknown` is reserved for text without a single alphabetic token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Unknown,
}

impl ProficiencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = String;

    /// Parses the exact level names. Matching is case-sensitive, so the
    /// string stored in a history record round-trips unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(ProficiencyLevel::Beginner),
            "Intermediate" => Ok(ProficiencyLevel::Intermediate),
            "Advanced" => Ok(ProficiencyLevel::Advanced),
            "Unknown" => Ok(ProficiencyLevel::Unknown),
            other => Err(format!("invalid proficiency level: '{other}'")),
        }
    }
}
