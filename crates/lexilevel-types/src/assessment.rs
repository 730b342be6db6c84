//! Results produced by the text analysis and recommendation pipeline.

use serde::{Deserialize, Serialize};

use crate::level::ProficiencyLevel;

/// Word statistics over the alphabetic tokens of a text sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Number of alphabetic tokens.
    pub token_count: usize,
    /// Mean token length in characters. `None` when there are no tokens.
    pub avg_word_length: Option<f64>,
}

/// Full outcome of assessing one text sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub level: ProficiencyLevel,
    pub metrics: TextMetrics,
    /// Flesch Reading Ease score (higher is easier).
    pub readability: f64,
}

/// Level plus ordered learning suggestions returned to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub level: ProficiencyLevel,
    /// Base suggestions for the level, then one entry per interest tag.
    pub suggestions: Vec<String>,
}
