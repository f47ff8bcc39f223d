//! # Brain Module
//!
//! Rule-based emotion analysis for the companion chat.
//! Classifies each utterance, then picks a reply for the detected emotion.
//!
//! ## Components
//! - `lexicon`: Fixed crisis, positive and negative keyword sets
//! - `emotion`: Emotion classification (crisis check, then sentiment counts)
//! - `responder`: Reply pools and selection
//! - `packet`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod emotion;
pub mod lexicon;
pub mod packet;
pub mod responder;

pub use analyzer::EmotionAnalyzer;
pub use emotion::{ClassificationResult, EmotionClassifier, EmotionLabel};
pub use packet::AnalysisPacket;
pub use responder::{Responder, CRISIS_RESPONSE};
