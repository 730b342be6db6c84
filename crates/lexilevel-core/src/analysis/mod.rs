//! Reading-difficulty assessment.
//!
//! [`assess_level`] runs the three stages in order: alphabetic tokenization
//! ([`text`]), Flesch Reading Ease ([`readability`]), and the threshold
//! rules in [`classifier`].

pub mod classifier;
pub mod readability;
pub mod text;

use lexilevel_types::assessment::Assessment;

/// Assess the proficiency level of a text sample.
///
/// Pure and total: empty or letter-free input yields `Unknown` rather
/// than an error.
pub fn assess_level(sample: &str) -> Assessment {
    let metrics = text::analyze(sample);
    let readability = readability::flesch_reading_ease(sample);
    let level = classifier::classify(
        metrics.token_count,
        metrics.avg_word_length.unwrap_or(0.0),
        readability,
    );

    tracing::debug!(
        tokens = metrics.token_count,
        avg_word_length = ?metrics.avg_word_length,
        readability,
        %level,
        "assessed text sample"
    );

    Assessment {
        level,
        metrics,
        readability,
    }
}
