//! Emotion Analyzer - runs the classify then respond pipeline for one utterance.
//!
//! The analyzer itself is stateless. Randomness only enters through the reply
//! pick, and callers that need reproducible output pass their own generator.

use chrono::Utc;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, warn};

use super::emotion::EmotionClassifier;
use super::packet::AnalysisPacket;
use super::responder::Responder;

/// Orchestrates classification and reply selection
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionAnalyzer {
    classifier: EmotionClassifier,
    responder: Responder,
}

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self {
            classifier: EmotionClassifier::new(),
            responder: Responder::new(),
        }
    }

    pub fn classifier(&self) -> &EmotionClassifier {
        &self.classifier
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Analyze an utterance using the thread-local generator
    pub fn analyze(&self, utterance: &str) -> AnalysisPacket {
        self.analyze_with(utterance, &mut rand::thread_rng())
    }

    /// Analyze an utterance, drawing the reply from `rng`
    pub fn analyze_with<R: Rng + ?Sized>(&self, utterance: &str, rng: &mut R) -> AnalysisPacket {
        let start = Instant::now();
        let mut packet = AnalysisPacket::new(utterance.to_string());

        // 1. Classify
        packet.classification = self.classifier.classify(utterance);
        packet.crisis_detected = packet.classification.label.is_crisis();

        // 2. Pick reply for the label
        packet.reply = self
            .responder
            .respond_with(packet.classification.label, rng)
            .to_string();

        packet.processing_time_us = start.elapsed().as_micros() as u64;
        packet.timestamp = Utc::now();

        if packet.crisis_detected {
            warn!(
                keywords = ?packet.classification.matched_keywords,
                "Crisis language detected"
            );
        } else {
            debug!("{}", packet.summary());
        }

        packet
    }
}
