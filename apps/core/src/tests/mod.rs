//! Test Module
//!
//! Test suite for the companion core.
//!
//! ## Test Categories
//! - `emotion_tests`: Classification rules, reply pools, analyzer pipeline
//! - `conversation_tests`: Transcript, crisis alerts, mood summary
//! - `config_tests`: Environment-driven configuration
