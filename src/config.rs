//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Speech-to-text settings.
#[derive(Debug, Clone)]
pub struct AsrConfig {
    /// Program that transcribes an audio file and prints segments to stdout.
    pub command: String,
    /// Extra arguments placed before the generated flags.
    pub args: Vec<String>,
    /// Model size passed to the transcriber ("base", "small", ...).
    pub model: String,
    pub device: String,
    pub compute_type: String,
    pub language: String,
    /// Decoding breadth; larger is slower but more accurate.
    pub beam_size: u32,
    /// Voice-activity detection.
    pub vad_filter: bool,
    pub timeout: Duration,
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            command: "whisper-transcribe".to_string(),
            args: Vec::new(),
            model: "base".to_string(),
            device: "cpu".to_string(),
            compute_type: "int8".to_string(),
            language: "es".to_string(),
            beam_size: 3,
            vad_filter: true,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub asr: AsrConfig,
    /// HTTP port for `serve`.
    pub port: u16,
    /// Root of the per-mood sound clip folders, if reactions are enabled.
    pub sounds_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asr: AsrConfig::default(),
            port: 8080,
            sounds_dir: None,
        }
    }
}

impl Config {
    /// Build config from `MOOD_SIGNAL_*` environment variables.
    ///
    /// Unset variables take their defaults; set but unparseable ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let d = defaults.asr;

        let asr = AsrConfig {
            command: lookup("MOOD_SIGNAL_ASR_COMMAND").unwrap_or(d.command),
            args: lookup("MOOD_SIGNAL_ASR_ARGS")
                .map(|s| s.split_whitespace().map(String::from).collect())
                .unwrap_or(d.args),
            model: lookup("MOOD_SIGNAL_MODEL").unwrap_or(d.model),
            device: lookup("MOOD_SIGNAL_DEVICE").unwrap_or(d.device),
            compute_type: lookup("MOOD_SIGNAL_COMPUTE_TYPE").unwrap_or(d.compute_type),
            language: lookup("MOOD_SIGNAL_LANGUAGE").unwrap_or(d.language),
            beam_size: parse_var(&lookup, "MOOD_SIGNAL_BEAM_SIZE")?.unwrap_or(d.beam_size),
            vad_filter: parse_bool(&lookup, "MOOD_SIGNAL_VAD")?.unwrap_or(d.vad_filter),
            timeout: parse_var::<u64, _>(&lookup, "MOOD_SIGNAL_ASR_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(d.timeout),
        };

        let port = parse_var(&lookup, "MOOD_SIGNAL_PORT")?.unwrap_or(defaults.port);
        let sounds_dir = lookup("MOOD_SIGNAL_SOUNDS_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            asr,
            port,
            sounds_dir,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> std::result::Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{raw:?}: {e}"),
            }),
    }
}

fn parse_bool<F>(lookup: &F, key: &str) -> std::result::Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(None),
        Some("1" | "true" | "yes" | "on") => Ok(Some(true)),
        Some("0" | "false" | "no" | "off") => Ok(Some(false)),
        Some(other) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}
