//! Intent/mood classification of ASR transcripts.
//!
//! raw text → [`normalize`] → [`MoodEngine`] → [`ClassificationResult`].
//! Pure and total: every string maps to exactly one result.

pub mod engine;
pub mod normalize;
pub mod rules;
pub mod types;

pub use engine::{MoodEngine, classify};
pub use normalize::normalize;
pub use rules::{Group, PatternGroup, RuleSet};
pub use types::{Analysis, ClassificationResult, Intent, Mood, Tier};
