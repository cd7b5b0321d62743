//! Command-line modes.
//!
//! One-shot modes always print exactly one well-formed classification.
//! Configuration and transcription problems collapse to the empty result.

use std::path::PathBuf;

use tracing::warn;

use crate::asr::{CommandTranscriber, TranscribeOptions};
use crate::classifier::{ClassificationResult, MoodEngine};
use crate::config::Config;
use crate::pipeline::analyze_audio;

pub const USAGE: &str = "usage: mood-signal <audio-path> | --text <utterance> | serve";

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Help,
    Serve,
    Classify(Input),
}

/// Input for a one-shot classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// No arguments: nothing to classify.
    Nothing,
    Text(String),
    Audio(PathBuf),
}

impl Mode {
    /// Parse arguments, program name excluded.
    pub fn parse(args: &[String]) -> Self {
        match args.first().map(String::as_str) {
            None => Mode::Classify(Input::Nothing),
            Some("-h" | "--help") => Mode::Help,
            Some("serve") => Mode::Serve,
            Some("--text") => Mode::Classify(Input::Text(args[1..].join(" "))),
            Some(audio) => Mode::Classify(Input::Audio(PathBuf::from(audio))),
        }
    }
}

/// Run a one-shot classification and return the JSON line to print.
pub async fn run<F>(input: &Input, lookup: F, engine: &MoodEngine) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let result = match input {
        Input::Nothing => ClassificationResult::degenerate(),
        Input::Text(text) => engine.classify(text),
        Input::Audio(audio) => match Config::from_lookup(lookup) {
            Ok(config) => {
                let transcriber = CommandTranscriber::from_config(&config.asr);
                let options = TranscribeOptions::from(&config.asr);
                analyze_audio(&transcriber, engine, audio, &options).await
            }
            Err(e) => {
                warn!(error = %e, "Invalid configuration, emitting empty result");
                ClassificationResult::degenerate()
            }
        },
    };
    result.to_json()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    const EMPTY: &str = r#"{"intent":"NONE","mood":"NONE","confidence":0.0,"text":""}"#;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lookup_from(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        move |key| map.get(key).cloned()
    }

    /// A shell script that prints `transcript`, run through `sh` so it needs no exec bit.
    fn fake_asr(transcript: &str) -> tempfile::NamedTempFile {
        let mut script = tempfile::NamedTempFile::new().unwrap();
        writeln!(script, "echo '{transcript}'").unwrap();
        script
    }

    #[test]
    fn parses_modes() {
        assert_eq!(Mode::parse(&[]), Mode::Classify(Input::Nothing));
        assert_eq!(Mode::parse(&args(&["--help"])), Mode::Help);
        assert_eq!(Mode::parse(&args(&["serve"])), Mode::Serve);
        assert_eq!(
            Mode::parse(&args(&["--text", "que", "miedo"])),
            Mode::Classify(Input::Text("que miedo".into()))
        );
        assert_eq!(
            Mode::parse(&args(&["/tmp/clip.ogg"])),
            Mode::Classify(Input::Audio(PathBuf::from("/tmp/clip.ogg")))
        );
    }

    #[tokio::test]
    async fn no_input_prints_empty_result() {
        let out = run(&Input::Nothing, |_| None, &MoodEngine::new()).await;
        assert_eq!(out, EMPTY);
    }

    #[tokio::test]
    async fn text_mode_classifies_literal_text() {
        let out = run(&Input::Text("Cállate ya".into()), |_| None, &MoodEngine::new()).await;
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["intent"], "STOP");
        assert_eq!(json["text"], "Cállate ya");
    }

    #[tokio::test]
    async fn audio_mode_transcribes_then_classifies() {
        let audio = tempfile::NamedTempFile::new().unwrap();
        let script = fake_asr("estoy triste");
        let lookup = lookup_from(&[
            ("MOOD_SIGNAL_ASR_COMMAND", "sh".to_string()),
            ("MOOD_SIGNAL_ASR_ARGS", script.path().display().to_string()),
        ]);

        let input = Input::Audio(audio.path().to_path_buf());
        let out = run(&input, lookup, &MoodEngine::new()).await;
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["mood"], "SAD");
        assert_eq!(json["text"], "estoy triste");
    }

    #[tokio::test]
    async fn bad_config_in_audio_mode_prints_empty_result() {
        let audio = tempfile::NamedTempFile::new().unwrap();
        let lookup = lookup_from(&[("MOOD_SIGNAL_BEAM_SIZE", "x".to_string())]);

        let input = Input::Audio(audio.path().to_path_buf());
        let out = run(&input, lookup, &MoodEngine::new()).await;
        assert_eq!(out, EMPTY);
    }

    #[tokio::test]
    async fn failing_transcriber_prints_empty_result() {
        let audio = tempfile::NamedTempFile::new().unwrap();
        let lookup = lookup_from(&[("MOOD_SIGNAL_ASR_COMMAND", "false".to_string())]);

        let input = Input::Audio(audio.path().to_path_buf());
        let out = run(&input, lookup, &MoodEngine::new()).await;
        assert_eq!(out, EMPTY);
    }
}
