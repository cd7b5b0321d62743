//! Error types for mood-signal.
//!
//! The classifier itself is total and has no error type. Everything here
//! belongs to the layers around it: configuration, transcription and sound
//! clip lookup.

use std::time::Duration;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("ASR error: {0}")]
    Asr(#[from] AsrError),

    #[error("Sound error: {0}")]
    Sound(#[from] SoundError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Speech-to-text errors.
#[derive(Debug, thiserror::Error)]
pub enum AsrError {
    #[error("Audio file not found: {0}")]
    AudioNotFound(String),

    #[error("Failed to spawn transcriber {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("Transcriber exited with code {code}: {stderr}")]
    Failed { code: i32, stderr: String },

    #[error("Transcriber timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sound clip lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    #[error("Rejected sound path: {0}")]
    InvalidPath(String),

    #[error("Sound clip not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
