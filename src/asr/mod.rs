//! Speech-to-text boundary.
//!
//! The classifier only ever sees text. Anything that can turn an audio file
//! into a transcript implements [`Transcriber`].

pub mod command;

pub use command::CommandTranscriber;

use std::path::Path;

use async_trait::async_trait;

use crate::config::AsrConfig;
use crate::error::AsrError;

/// Per-call decoding options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeOptions {
    /// Source language hint.
    pub language: String,
    pub vad_filter: bool,
    pub beam_size: u32,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            language: "es".to_string(),
            vad_filter: true,
            beam_size: 3,
        }
    }
}

impl From<&AsrConfig> for TranscribeOptions {
    fn from(config: &AsrConfig) -> Self {
        Self {
            language: config.language.clone(),
            vad_filter: config.vad_filter,
            beam_size: config.beam_size,
        }
    }
}

/// Turns an audio file into one transcript string.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Transcribe `audio`, returning recognized segments joined by single spaces.
    async fn transcribe(
        &self,
        audio: &Path,
        options: &TranscribeOptions,
    ) -> Result<String, AsrError>;
}

/// Join recognized segments: each trimmed, empties dropped, single-space separated.
pub fn join_segments<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
