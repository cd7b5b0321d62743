//! Mood Signal: intent/mood control signals from spoken Spanish transcripts.

pub mod asr;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod server;
pub mod sounds;

pub use classifier::{ClassificationResult, Intent, Mood, MoodEngine, classify, normalize};
