//! Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher scores mean easier text. Everyday prose lands roughly between 0
//! and 100; very short or very dense samples can fall outside that range.
//! Syllables are estimated from vowel groups.

const BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Score of text without words: `BASE` with both ratios taken as zero.
const EMPTY_TEXT_SCORE: f64 = 206.84;

/// Compute the Flesch Reading Ease score of `text`, rounded to two decimals.
///
/// Never fails: text without words gets the fixed score `206.84`.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words = words(text);
    if words.is_empty() {
        return EMPTY_TEXT_SCORE;
    }

    let sentences = count_sentences(text).max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    round2(BASE - SENTENCE_LENGTH_WEIGHT * words_per_sentence - SYLLABLE_WEIGHT * syllables_per_word)
}

/// Whitespace-separated lexemes with surrounding punctuation stripped.
/// Lexemes that are pure punctuation are not words.
fn words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Sentences are spans ended by `.`, `!` or `?` (or end of input) that
/// contain at least one alphanumeric character. `"Wait... what?!"` is two.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}

/// Estimate syllables in a single word by counting vowel groups.
///
/// A trailing silent `e` is dropped when the word has more than one group,
/// except for the consonant + `le` ending (`ta-ble`). Every word has at
/// least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().filter(|c| c.is_alphabetic()).collect();
    if chars.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    let n = chars.len();
    let silent_e = n >= 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]);
    let consonant_le = n >= 3 && chars[n - 2] == 'l' && !is_vowel(chars[n - 3]);
    if silent_e && !consonant_le && groups > 1 {
        groups -= 1;
    }

    groups.max(1)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
