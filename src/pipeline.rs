//! Audio file → classification.
//!
//! Always yields a well-formed result: transcription failures collapse to
//! [`ClassificationResult::degenerate`] instead of propagating.

use std::path::Path;

use tracing::{info, warn};

use crate::asr::{TranscribeOptions, Transcriber};
use crate::classifier::{ClassificationResult, MoodEngine};

/// Transcribe `audio` and classify the transcript.
pub async fn analyze_audio(
    transcriber: &dyn Transcriber,
    engine: &MoodEngine,
    audio: &Path,
    options: &TranscribeOptions,
) -> ClassificationResult {
    let text = match transcriber.transcribe(audio, options).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                transcriber = transcriber.name(),
                audio = %audio.display(),
                error = %e,
                "Transcription failed, emitting empty result"
            );
            return ClassificationResult::degenerate();
        }
    };

    let result = engine.classify(&text);
    info!(
        intent = ?result.intent(),
        mood = ?result.mood(),
        confidence = result.confidence(),
        "Audio classified"
    );
    result
}
