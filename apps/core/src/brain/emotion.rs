//! Emotion classification using fixed keyword sets.
//!
//! Crisis phrases are checked first and preempt everything else. Otherwise the
//! positive and negative term hits are compared and the larger side wins.
//! No model, no tokenizer - plain substring containment on lowercased text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lexicon::{self, CRISIS_KEYWORDS, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::error::AppError;

/// Score reported for a tie, including the no-hit case
pub const NEUTRAL_SCORE: f32 = 0.5;

/// Score reported whenever a crisis phrase is present
pub const CRISIS_SCORE: f32 = 1.0;

/// Discrete emotion assigned to one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Positive,
    Negative,
    Neutral,
    /// Self-harm language detected
    Crisis,
}

impl EmotionLabel {
    /// All labels, in display order
    pub const ALL: [EmotionLabel; 4] = [
        EmotionLabel::Positive,
        EmotionLabel::Negative,
        EmotionLabel::Neutral,
        EmotionLabel::Crisis,
    ];

    /// Returns the lowercase wire name of the label
    pub fn label(&self) -> &'static str {
        match self {
            EmotionLabel::Positive => "positive",
            EmotionLabel::Negative => "negative",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Crisis => "crisis",
        }
    }

    pub fn is_crisis(&self) -> bool {
        matches!(self, EmotionLabel::Crisis)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EmotionLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmotionLabel::ALL
            .into_iter()
            .find(|label| label.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown emotion label: '{}'", s)))
    }
}

/// Result of emotion classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Detected emotion
    pub label: EmotionLabel,
    /// Share of hits on the winning side (0.0 - 1.0)
    pub score: f32,
    /// Keywords that matched, crisis phrases or sentiment terms
    pub matched_keywords: Vec<String>,
}

impl ClassificationResult {
    fn crisis(phrase: &str) -> Self {
        Self {
            label: EmotionLabel::Crisis,
            score: CRISIS_SCORE,
            matched_keywords: vec![phrase.to_string()],
        }
    }
}

/// Keyword-based emotion classifier.
///
/// Holds only references to the static keyword sets, so a single instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct EmotionClassifier {
    crisis_keywords: &'static [&'static str],
    positive_words: &'static [&'static str],
    negative_words: &'static [&'static str],
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionClassifier {
    /// Create a classifier over the built-in keyword sets
    pub fn new() -> Self {
        Self {
            crisis_keywords: CRISIS_KEYWORDS,
            positive_words: POSITIVE_WORDS,
            negative_words: NEGATIVE_WORDS,
        }
    }

    /// Classify the emotion of a text.
    ///
    /// Never fails. Text without any hits resolves to neutral.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text_lower = text.to_lowercase();

        if let Some(phrase) = self
            .crisis_keywords
            .iter()
            .find(|phrase| text_lower.contains(*phrase))
        {
            return ClassificationResult::crisis(phrase);
        }

        let positive = lexicon::matched_terms(&text_lower, self.positive_words);
        let negative = lexicon::matched_terms(&text_lower, self.negative_words);
        let (p, n) = (positive.len(), negative.len());

        // p == n also covers 0 == 0, so the ratio below never divides by zero
        let (label, score) = if p > n {
            (EmotionLabel::Positive, p as f32 / (p + n) as f32)
        } else if n > p {
            (EmotionLabel::Negative, n as f32 / (p + n) as f32)
        } else {
            (EmotionLabel::Neutral, NEUTRAL_SCORE)
        };

        ClassificationResult {
            label,
            score,
            matched_keywords: positive
                .into_iter()
                .chain(negative)
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_detection() {
        let classifier = EmotionClassifier::new();

        let result = classifier.classify("I am so happy and grateful today");
        assert_eq!(result.label, EmotionLabel::Positive);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.matched_keywords, vec!["happy", "grateful"]);
    }

    #[test]
    fn test_negative_detection() {
        let classifier = EmotionClassifier::new();

        let result = classifier.classify("I feel sad and hopeless");
        assert_eq!(result.label, EmotionLabel::Negative);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_neutral_without_hits() {
        let classifier = EmotionClassifier::new();

        let result = classifier.classify("The weather is mild");
        assert_eq!(result.label, EmotionLabel::Neutral);
        assert_eq!(result.score, NEUTRAL_SCORE);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_neutral_on_tie() {
        let classifier = EmotionClassifier::new();

        let result = classifier.classify("happy but also sad");
        assert_eq!(result.label, EmotionLabel::Neutral);
        assert_eq!(result.score, NEUTRAL_SCORE);
        assert_eq!(result.matched_keywords.len(), 2);
    }

    #[test]
    fn test_mixed_ratio() {
        let classifier = EmotionClassifier::new();

        let result = classifier.classify("Feeling good and better, though a bit worried");
        assert_eq!(result.label, EmotionLabel::Positive);
        assert!((result.score - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_crisis_preempts_sentiment() {
        let classifier = EmotionClassifier::new();

        let result = classifier.classify("I'm happy, grateful and thankful but I want to END IT ALL");
        assert_eq!(result.label, EmotionLabel::Crisis);
        assert_eq!(result.score, CRISIS_SCORE);
        assert_eq!(result.matched_keywords, vec!["end it all"]);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("Crisis".parse::<EmotionLabel>().unwrap(), EmotionLabel::Crisis);
        assert_eq!(" neutral ".parse::<EmotionLabel>().unwrap(), EmotionLabel::Neutral);
        assert!(matches!(
            "ecstatic".parse::<EmotionLabel>(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_label_serde_lowercase() {
        let json = serde_json::to_string(&EmotionLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
