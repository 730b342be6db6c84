//! Threshold rules mapping text metrics to a proficiency level.

use lexilevel_types::level::ProficiencyLevel;

/// Readability above this (exclusive) is "easy" for the Beginner rule.
pub const BEGINNER_MIN_READABILITY: f64 = 70.0;
/// Average word length below this (exclusive) is required for Beginner.
pub const BEGINNER_MAX_WORD_LENGTH: f64 = 5.0;
/// Inclusive readability band for Intermediate.
pub const INTERMEDIATE_READABILITY: std::ops::RangeInclusive<f64> = 50.0..=70.0;

/// Classify a text from its token count, average word length, and
/// readability score.
///
/// Rules are checked in order and the first match wins:
///
/// 1. no tokens: `Unknown`
/// 2. readability > 70 and average word length < 5: `Beginner`
/// 3. 50 <= readability <= 70: `Intermediate`
/// 4. anything else: `Advanced`
///
/// The bands do not cover the plane, so easy-to-read text made of long
/// words (readability 75, average length 6) falls through to `Advanced`.
/// `avg_word_length` is ignored when `token_count` is zero.
pub fn classify(token_count: usize, avg_word_length: f64, readability: f64) -> ProficiencyLevel {
    if token_count == 0 {
        ProficiencyLevel::Unknown
    } else if readability > BEGINNER_MIN_READABILITY && avg_word_length < BEGINNER_MAX_WORD_LENGTH {
        ProficiencyLevel::Beginner
    } else if INTERMEDIATE_READABILITY.contains(&readability) {
        ProficiencyLevel::Intermediate
    } else {
        ProficiencyLevel::Advanced
    }
}
