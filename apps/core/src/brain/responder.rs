//! Reply selection for classified utterances.
//!
//! Crisis gets one fixed message. Every other label draws uniformly from its
//! own pool. The random source is always passed in by the caller; the
//! convenience [`Responder::respond`] falls back to the thread-local generator.

use rand::Rng;

use super::emotion::EmotionLabel;

/// Fixed reply for crisis utterances. Never randomized.
pub const CRISIS_RESPONSE: &str = "I'm really concerned about what you're sharing with me. \
Your life has value and there are people who want to help. Please consider reaching out to a \
crisis hotline: National Suicide Prevention Lifeline: 988. Would you like me to help you find \
local mental health resources?";

const NEGATIVE_RESPONSES: &[&str] = &[
    "I hear that you're going through a difficult time. Those feelings are valid, and it's okay \
     to not be okay sometimes. Can you tell me more about what's troubling you?",
    "It sounds like you're dealing with some challenging emotions right now. I'm here to listen \
     without judgment. What's been weighing on your mind?",
    "Thank you for sharing that with me. It takes courage to open up about difficult feelings. \
     How long have you been experiencing this?",
];

const POSITIVE_RESPONSES: &[&str] = &[
    "I'm so glad to hear that you're feeling positive! It's wonderful that you're taking time to \
     check in with yourself. What's been contributing to these good feelings?",
    "That's great to hear! Positive moments are worth celebrating. How can we build on this \
     feeling?",
    "I'm happy you're feeling well. It's important to acknowledge and appreciate these positive \
     emotions.",
];

const NEUTRAL_RESPONSES: &[&str] = &[
    "I appreciate you sharing that with me. Can you tell me more about how you've been feeling \
     lately?",
    "Thank you for opening up. What's been on your mind today?",
    "I'm here to listen. Is there anything specific you'd like to talk about?",
];

/// Selects companion replies from the fixed response pools
#[derive(Debug, Clone, Copy)]
pub struct Responder {
    negative: &'static [&'static str],
    positive: &'static [&'static str],
    neutral: &'static [&'static str],
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    pub fn new() -> Self {
        Self {
            negative: NEGATIVE_RESPONSES,
            positive: POSITIVE_RESPONSES,
            neutral: NEUTRAL_RESPONSES,
        }
    }

    /// Returns the candidate pool for a label, `None` for crisis
    pub fn pool(&self, label: EmotionLabel) -> Option<&'static [&'static str]> {
        match label {
            EmotionLabel::Negative => Some(self.negative),
            EmotionLabel::Positive => Some(self.positive),
            EmotionLabel::Neutral => Some(self.neutral),
            EmotionLabel::Crisis => None,
        }
    }

    /// Pick a reply using the thread-local generator
    pub fn respond(&self, label: EmotionLabel) -> &'static str {
        self.respond_with(label, &mut rand::thread_rng())
    }

    /// Pick a reply using a caller-supplied generator
    pub fn respond_with<R: Rng + ?Sized>(&self, label: EmotionLabel, rng: &mut R) -> &'static str {
        match self.pool(label) {
            Some(pool) => {
                assert!(!pool.is_empty(), "response pool for '{}' is empty", label);
                pool[rng.gen_range(0..pool.len())]
            }
            None => CRISIS_RESPONSE,
        }
    }

    /// Reply at an explicit pool position, wrapping around the pool length.
    ///
    /// Crisis ignores the index.
    pub fn reply_at(&self, label: EmotionLabel, index: usize) -> &'static str {
        match self.pool(label) {
            Some(pool) => {
                assert!(!pool.is_empty(), "response pool for '{}' is empty", label);
                pool[index % pool.len()]
            }
            None => CRISIS_RESPONSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_crisis_response_is_fixed() {
        let responder = Responder::new();
        let first = responder.respond(EmotionLabel::Crisis);

        for _ in 0..50 {
            assert_eq!(responder.respond(EmotionLabel::Crisis), first);
        }
        assert!(first.contains("988"));
        assert!(first.contains("Lifeline"));
    }

    #[test]
    fn test_positive_covers_pool() {
        let responder = Responder::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let reply = responder.respond_with(EmotionLabel::Positive, &mut rng);
            assert!(POSITIVE_RESPONSES.contains(&reply));
            seen.insert(reply);
        }

        assert_eq!(seen.len(), POSITIVE_RESPONSES.len());
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let responder = Responder::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(
                responder.respond_with(EmotionLabel::Neutral, &mut a),
                responder.respond_with(EmotionLabel::Neutral, &mut b)
            );
        }
    }

    #[test]
    fn test_reply_at_wraps() {
        let responder = Responder::new();

        assert_eq!(responder.reply_at(EmotionLabel::Negative, 0), NEGATIVE_RESPONSES[0]);
        assert_eq!(responder.reply_at(EmotionLabel::Negative, 4), NEGATIVE_RESPONSES[1]);
        assert_eq!(responder.reply_at(EmotionLabel::Crisis, 2), CRISIS_RESPONSE);
    }

    #[test]
    fn test_pools_have_three_entries() {
        let responder = Responder::new();
        for label in [EmotionLabel::Positive, EmotionLabel::Negative, EmotionLabel::Neutral] {
            assert_eq!(responder.pool(label).map(|p| p.len()), Some(3));
        }
        assert!(responder.pool(EmotionLabel::Crisis).is_none());
    }
}
