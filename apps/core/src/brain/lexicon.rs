//! Fixed keyword sets used by the emotion classifier.
//!
//! All entries are lowercase. Matching is plain substring containment against
//! the lowercased utterance, so "unhappy" still hits "happy".

/// Phrases that force the crisis label regardless of anything else in the text
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "can't go on",
];

/// Terms counted toward a positive reading
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "wonderful",
    "amazing",
    "better",
    "grateful",
    "thankful",
];

/// Terms counted toward a negative reading
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "depressed",
    "anxious",
    "worried",
    "stressed",
    "angry",
    "frustrated",
    "hopeless",
];

/// Returns the terms of `set` that occur somewhere in `text_lower`.
///
/// Each term is reported at most once, in set order.
pub fn matched_terms(text_lower: &str, set: &[&'static str]) -> Vec<&'static str> {
    set.iter()
        .copied()
        .filter(|term| text_lower.contains(term))
        .collect()
}
