//! Analysis Packet - Output structure for one analyzed utterance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::emotion::{ClassificationResult, EmotionLabel, NEUTRAL_SCORE};

/// Complete result of analyzing one utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisPacket {
    /// Original user utterance
    pub utterance: String,

    /// Detected emotion with score
    pub classification: ClassificationResult,

    /// Companion reply chosen for the label
    pub reply: String,

    /// Whether the caller must raise a crisis notification
    pub crisis_detected: bool,

    /// Processing time in microseconds
    pub processing_time_us: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl AnalysisPacket {
    /// Create a new packet with a neutral placeholder classification
    pub fn new(utterance: String) -> Self {
        Self {
            utterance,
            classification: ClassificationResult {
                label: EmotionLabel::Neutral,
                score: NEUTRAL_SCORE,
                matched_keywords: vec![],
            },
            reply: String::new(),
            crisis_detected: false,
            processing_time_us: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn label(&self) -> EmotionLabel {
        self.classification.label
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Emotion: {} ({:.0}%), Keywords: [{}], Crisis: {}",
            self.classification.label,
            self.classification.score * 100.0,
            self.classification.matched_keywords.join(", "),
            if self.crisis_detected { "yes" } else { "no" }
        )
    }
}
