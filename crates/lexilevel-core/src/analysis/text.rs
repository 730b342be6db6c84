//! Alphabetic tokenization and word-length statistics.

use lexilevel_types::assessment::TextMetrics;

/// Split a text sample into alphabetic word tokens.
///
/// A token is a maximal run of alphabetic characters; digits, punctuation,
/// and whitespace all act as separators, so `"don't"` yields `"don"` and
/// `"t"` and `"R2D2"` yields `"R"` and `"D"`.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Count the alphabetic tokens and their mean length in characters.
pub fn analyze(text: &str) -> TextMetrics {
    let tokens = tokenize(text);
    let token_count = tokens.len();

    let avg_word_length = if token_count == 0 {
        None
    } else {
        let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        Some(total_chars as f64 / token_count as f64)
    };

    TextMetrics {
        token_count,
        avg_word_length,
    }
}
