//! Classification output types.

use serde::Serialize;

/// Top-level classification axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    /// The speaker wants the bot to stop.
    Stop,
    /// The utterance carries an emotional coloring.
    Mood,
    None,
}

/// Emotional/tonal label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    Stop,
    Chaos,
    Sad,
    Corny,
    Hype,
    Tense,
    None,
}

/// One precedence level of the rule engine, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Stop,
    Chaos,
    Sad,
    Corny,
    Hype,
    Tense,
    None,
}

impl Tier {
    /// The fixed (intent, mood, confidence) triple this tier produces.
    pub fn outcome(self) -> (Intent, Mood, f64) {
        match self {
            Tier::Stop => (Intent::Stop, Mood::Stop, 0.92),
            Tier::Chaos => (Intent::Mood, Mood::Chaos, 0.80),
            Tier::Sad => (Intent::Mood, Mood::Sad, 0.78),
            Tier::Corny => (Intent::Mood, Mood::Corny, 0.75),
            Tier::Hype => (Intent::Mood, Mood::Hype, 0.74),
            Tier::Tense => (Intent::Mood, Mood::Tense, 0.72),
            Tier::None => (Intent::None, Mood::None, 0.50),
        }
    }
}

/// Result of classifying one utterance.
///
/// Serializes to a flat `{intent, mood, confidence, text}` object. Values are
/// only produced by the engine or [`ClassificationResult::degenerate`], so the
/// intent/mood pairing is always consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    intent: Intent,
    mood: Mood,
    confidence: f64,
    text: String,
}

impl ClassificationResult {
    pub(crate) fn from_tier(tier: Tier, text: impl Into<String>) -> Self {
        let (intent, mood, confidence) = tier.outcome();
        Self {
            intent,
            mood,
            confidence,
            text: text.into(),
        }
    }

    /// Result for "nothing to classify" (no audio, or transcription failed).
    ///
    /// Distinct from the 0.50 fallback, which means real text matched nothing.
    pub fn degenerate() -> Self {
        Self {
            intent: Intent::None,
            mood: Mood::None,
            confidence: 0.0,
            text: String::new(),
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// The trimmed input, echoed for traceability.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Serialize as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            String::from(r#"{"intent":"NONE","mood":"NONE","confidence":0.0,"text":""}"#)
        })
    }
}

/// Detailed view of one classification, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Canonical form the patterns were matched against.
    pub normalized: String,
    /// Distinct vulgarity patterns found.
    pub swear_hits: usize,
    /// Distinct laughter/shouting patterns found.
    pub chaos_hits: usize,
    /// Tier that decided the result.
    pub tier: Tier,
    pub result: ClassificationResult,
}
