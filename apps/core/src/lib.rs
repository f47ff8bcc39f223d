//! Companion Core
//!
//! Keyword-driven emotion classification and reply selection for a mental
//! health companion chat, with an in-memory conversation on top.

pub mod brain;
pub mod config;
pub mod conversation;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use brain::{ClassificationResult, EmotionAnalyzer, EmotionClassifier, EmotionLabel, Responder};
pub use config::CompanionConfig;
pub use conversation::Conversation;
pub use error::AppError;
