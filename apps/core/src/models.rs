use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::brain::EmotionLabel;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Companion,
}

/// Represents a single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message.
    pub id: Uuid,
    /// The text content of the message.
    pub content: String,
    /// The author of the message.
    pub sender: Sender,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
    /// Emotion attached to the message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionLabel>,
    /// Score of the attached emotion. Only set on user messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_score: Option<f32>,
}

impl Message {
    pub fn user(content: String, emotion: EmotionLabel, score: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender: Sender::User,
            timestamp: Utc::now(),
            emotion: Some(emotion),
            emotion_score: Some(score),
        }
    }

    pub fn companion(content: String, emotion: EmotionLabel) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender: Sender::Companion,
            timestamp: Utc::now(),
            emotion: Some(emotion),
            emotion_score: None,
        }
    }
}

/// High-visibility notification raised when crisis language is detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisAlert {
    pub title: String,
    pub description: String,
    /// Keywords that triggered the alert.
    pub keywords: Vec<String>,
}

impl CrisisAlert {
    pub const TITLE: &'static str = "Crisis Detected";
    pub const DESCRIPTION: &'static str =
        "We've detected you may be in distress. Please reach out for immediate help.";

    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            description: Self::DESCRIPTION.to_string(),
            keywords,
        }
    }
}

/// Outcome of submitting one utterance to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// The recorded user message, tagged with its emotion.
    pub user_message: Message,
    /// The companion's reply.
    pub reply: Message,
    /// How long the caller should show a typing indicator before the reply.
    pub typing_delay: Duration,
    /// Present only when the utterance was classified as crisis.
    pub crisis_alert: Option<CrisisAlert>,
}

/// Emotion statistics computed over the user messages of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub total_messages: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub crisis: usize,
    /// Mean classification score, `None` before the first user message.
    pub average_score: Option<f32>,
    pub latest_mood: Option<EmotionLabel>,
    /// Most frequent label; ties go to the label seen most recently.
    pub dominant_mood: Option<EmotionLabel>,
}

impl MoodSummary {
    pub fn count(&self, label: EmotionLabel) -> usize {
        match label {
            EmotionLabel::Positive => self.positive,
            EmotionLabel::Negative => self.negative,
            EmotionLabel::Neutral => self.neutral,
            EmotionLabel::Crisis => self.crisis,
        }
    }

    /// Share of messages with the given label, 0.0 when empty
    pub fn share(&self, label: EmotionLabel) -> f32 {
        if self.total_messages == 0 {
            return 0.0;
        }
        self.count(label) as f32 / self.total_messages as f32
    }
}
