//! Learning-content recommendations.
//!
//! Each level has a fixed list of base suggestions. Every interest tag then
//! adds one "English lessons about {tag}" entry, in the order supplied.

use lexilevel_types::assessment::RecommendationResult;
use lexilevel_types::level::ProficiencyLevel;

/// Fixed suggestions for a level. `Unknown` has none.
pub fn base_suggestions(level: ProficiencyLevel) -> &'static [&'static str] {
    match level {
        ProficiencyLevel::Beginner => &["Basic grammar videos", "Simple conversation exercises"],
        ProficiencyLevel::Intermediate => &["Intermediate vocabulary", "Listening practice"],
        ProficiencyLevel::Advanced => &["Advanced writing challenges", "News articles"],
        ProficiencyLevel::Unknown => &[],
    }
}

/// Look up base suggestions by level name.
///
/// Unrecognized names get the empty list instead of an error.
pub fn base_suggestions_for_name(name: &str) -> &'static [&'static str] {
    name.parse::<ProficiencyLevel>()
        .map(base_suggestions)
        .unwrap_or(&[])
}

/// Split a comma-separated interest list into trimmed tags.
///
/// Tags are not deduplicated, lowercased, or filtered: `"music,,art"`
/// yields `["music", "", "art"]`, and an empty input yields one empty tag.
pub fn parse_interest_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Build the ordered suggestion list for a level and interest tags.
///
/// Tags are used verbatim; callers trim them via [`parse_interest_tags`].
pub fn recommend<S: AsRef<str>>(level: ProficiencyLevel, tags: &[S]) -> Vec<String> {
    let base = base_suggestions(level);
    let mut suggestions = Vec::with_capacity(base.len() + tags.len());
    suggestions.extend(base.iter().map(|s| s.to_string()));
    suggestions.extend(
        tags.iter()
            .map(|tag| format!("English lessons about {}", tag.as_ref())),
    );
    suggestions
}

/// [`recommend`] wrapped in a [`RecommendationResult`].
pub fn recommendation<S: AsRef<str>>(level: ProficiencyLevel, tags: &[S]) -> RecommendationResult {
    RecommendationResult {
        level,
        suggestions: recommend(level, tags),
    }
}
