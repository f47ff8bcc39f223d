//! In-memory conversation between a user and the companion.
//!
//! Keeps the transcript, tags each user message with its emotion, and tells
//! the caller when a crisis alert and a typing indicator are due. Nothing is
//! written to disk.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::brain::{EmotionAnalyzer, EmotionLabel};
use crate::config::CompanionConfig;
use crate::error::AppError;
use crate::models::{CrisisAlert, Message, MoodSummary, Sender, Turn};

/// Opening message of every conversation
pub const GREETING: &str = "Hello! I'm your AI mental health companion. I'm here to listen and \
support you. How are you feeling today?";

/// A single chat session
pub struct Conversation<R: Rng = StdRng> {
    id: Uuid,
    analyzer: EmotionAnalyzer,
    messages: Vec<Message>,
    typing_delay: (Duration, Duration),
    rng: R,
}

impl Conversation<StdRng> {
    /// Starts a conversation, seeding the generator from the config when a seed is set
    pub fn new(config: &CompanionConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Conversation<R> {
    /// Starts a conversation drawing replies and delays from `rng`
    pub fn with_rng(config: &CompanionConfig, rng: R) -> Self {
        let id = Uuid::new_v4();
        info!(conversation_id = %id, "Starting conversation");

        Self {
            id,
            analyzer: EmotionAnalyzer::new(),
            messages: vec![Message::companion(
                GREETING.to_string(),
                EmotionLabel::Positive,
            )],
            typing_delay: config.typing_delay_range(),
            rng,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Full transcript, greeting first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Submit one user utterance.
    ///
    /// Blank input is rejected and leaves the transcript untouched.
    #[instrument(skip(self, text), fields(conversation_id = %self.id))]
    pub fn submit(&mut self, text: &str) -> Result<Turn, AppError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }

        let packet = self.analyzer.analyze_with(content, &mut self.rng);
        let label = packet.classification.label;

        let user_message = Message::user(content.to_string(), label, packet.classification.score);

        let crisis_alert = if packet.crisis_detected {
            warn!("Raising crisis alert");
            Some(CrisisAlert::new(packet.classification.matched_keywords.clone()))
        } else {
            None
        };

        let typing_delay = self.next_typing_delay();

        // Replies are always tagged neutral, whatever the user's emotion
        let reply = Message::companion(packet.reply, EmotionLabel::Neutral);

        self.messages.push(user_message.clone());
        self.messages.push(reply.clone());

        info!(
            emotion = %label,
            score = packet.classification.score,
            delay_ms = typing_delay.as_millis() as u64,
            "Turn recorded"
        );

        Ok(Turn {
            user_message,
            reply,
            typing_delay,
            crisis_alert,
        })
    }

    fn next_typing_delay(&mut self) -> Duration {
        let (min, max) = self.typing_delay;
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Emotion statistics over the user messages so far
    pub fn mood_summary(&self) -> MoodSummary {
        let mut summary = MoodSummary::default();
        let mut score_total = 0.0_f32;
        let mut last_seen = [0usize; 4];

        let tagged = self
            .messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .filter_map(|m| m.emotion.map(|e| (e, m.emotion_score.unwrap_or(0.0))));

        for (position, (label, score)) in tagged.enumerate() {
            match label {
                EmotionLabel::Positive => summary.positive += 1,
                EmotionLabel::Negative => summary.negative += 1,
                EmotionLabel::Neutral => summary.neutral += 1,
                EmotionLabel::Crisis => summary.crisis += 1,
            }
            summary.total_messages += 1;
            score_total += score;
            summary.latest_mood = Some(label);
            last_seen[label_slot(label)] = position + 1;
        }

        if summary.total_messages > 0 {
            summary.average_score = Some(score_total / summary.total_messages as f32);
            let dominant = EmotionLabel::ALL
                .into_iter()
                .filter(|label| summary.count(*label) > 0)
                .max_by_key(|label| (summary.count(*label), last_seen[label_slot(*label)]));
            summary.dominant_mood = dominant;
        }

        summary
    }
}

fn label_slot(label: EmotionLabel) -> usize {
    match label {
        EmotionLabel::Positive => 0,
        EmotionLabel::Negative => 1,
        EmotionLabel::Neutral => 2,
        EmotionLabel::Crisis => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Conversation {
        let config = CompanionConfig {
            rng_seed: Some(seed),
            ..Default::default()
        };
        Conversation::new(&config)
    }

    #[test]
    fn test_starts_with_greeting() {
        let conversation = seeded(1);

        assert_eq!(conversation.messages().len(), 1);
        let greeting = &conversation.messages()[0];
        assert_eq!(greeting.sender, Sender::Companion);
        assert_eq!(greeting.content, GREETING);
        assert_eq!(greeting.emotion, Some(EmotionLabel::Positive));
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut conversation = seeded(1);

        assert!(matches!(conversation.submit("   "), Err(AppError::Validation(_))));
        assert!(matches!(conversation.submit(""), Err(AppError::Validation(_))));
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn test_turn_records_both_messages() {
        let mut conversation = seeded(1);

        let turn = conversation.submit("  I feel anxious  ").unwrap();

        assert_eq!(turn.user_message.content, "I feel anxious");
        assert_eq!(turn.user_message.emotion, Some(EmotionLabel::Negative));
        assert_eq!(turn.user_message.emotion_score, Some(1.0));
        assert_eq!(turn.reply.sender, Sender::Companion);
        assert_eq!(turn.reply.emotion, Some(EmotionLabel::Neutral));
        assert!(turn.crisis_alert.is_none());
        assert_eq!(conversation.messages().len(), 3);
    }

    #[test]
    fn test_typing_delay_within_window() {
        let mut conversation = seeded(9);

        for _ in 0..25 {
            let turn = conversation.submit("hello").unwrap();
            assert!(turn.typing_delay >= Duration::from_millis(1000));
            assert!(turn.typing_delay < Duration::from_millis(3000));
        }
    }

    #[test]
    fn test_fixed_typing_delay() {
        let config = CompanionConfig {
            typing_delay_min_ms: 0,
            typing_delay_max_ms: 0,
            rng_seed: Some(1),
            ..Default::default()
        };
        let mut conversation = Conversation::new(&config);

        let turn = conversation.submit("hello").unwrap();
        assert_eq!(turn.typing_delay, Duration::ZERO);
    }

    #[test]
    fn test_dominant_mood_tie_goes_to_latest() {
        let mut conversation = seeded(1);

        conversation.submit("I am sad").unwrap();
        conversation.submit("I am happy").unwrap();

        let summary = conversation.mood_summary();
        assert_eq!(summary.total_messages, 2);
        assert_eq!(summary.dominant_mood, Some(EmotionLabel::Positive));
        assert_eq!(summary.latest_mood, Some(EmotionLabel::Positive));
    }

    #[test]
    fn test_empty_summary() {
        let summary = seeded(1).mood_summary();

        assert_eq!(summary, MoodSummary::default());
        assert_eq!(summary.share(EmotionLabel::Neutral), 0.0);
    }
}
