use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::level::ProficiencyLevel;

/// Unique identifier for a history record, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryId(pub Uuid);

impl HistoryId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for HistoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HistoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A persisted snapshot of one submission and its computed level.
///
/// Records are append-only: created once per submission and never
/// updated or deleted by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: HistoryId,
    /// The submitted text sample, verbatim.
    pub text: String,
    /// Interest tags as parsed from the submission (empty tags included).
    pub hobbies: Vec<String>,
    pub level: ProficiencyLevel,
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time.
    pub fn new(text: String, hobbies: Vec<String>, level: ProficiencyLevel) -> Self {
        Self {
            id: HistoryId::new(),
            text,
            hobbies,
            level,
            timestamp: Utc::now(),
        }
    }
}
