//! Transcriber backed by an external speech-to-text program.
//!
//! The program is invoked as:
//!
//! ```text
//! <command> <args..> --model M --device D --compute-type C \
//!     --language L --beam-size N [--vad-filter] <audio-path>
//! ```
//!
//! and must print one recognized segment per stdout line.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, info};

use super::{TranscribeOptions, Transcriber, join_segments};
use crate::config::AsrConfig;
use crate::error::AsrError;

/// Maximum stderr kept in error messages.
const MAX_STDERR_EXCERPT: usize = 2 * 1024;

/// Default transcription timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs a speech-to-text command as a subprocess.
#[derive(Debug, Clone)]
pub struct CommandTranscriber {
    program: String,
    args: Vec<String>,
    model: String,
    device: String,
    compute_type: String,
    timeout: Duration,
}

impl CommandTranscriber {
    /// Create a transcriber for `program` with default model settings.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            model: "base".to_string(),
            device: "cpu".to_string(),
            compute_type: "int8".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(config: &AsrConfig) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
            model: config.model.clone(),
            device: config.device.clone(),
            compute_type: config.compute_type.clone(),
            timeout: config.timeout,
        }
    }

    /// Arguments placed before the generated flags.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_command(&self, audio: &Path, options: &TranscribeOptions) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .args(["--model", self.model.as_str()])
            .args(["--device", self.device.as_str()])
            .args(["--compute-type", self.compute_type.as_str()])
            .args(["--language", options.language.as_str()])
            .arg("--beam-size")
            .arg(options.beam_size.to_string());
        if options.vad_filter {
            command.arg("--vad-filter");
        }
        command
            .arg(audio)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl Transcriber for CommandTranscriber {
    fn name(&self) -> &str {
        &self.program
    }

    async fn transcribe(
        &self,
        audio: &Path,
        options: &TranscribeOptions,
    ) -> Result<String, AsrError> {
        if tokio::fs::metadata(audio).await.is_err() {
            return Err(AsrError::AudioNotFound(audio.display().to_string()));
        }

        let mut child = self
            .build_command(audio, options)
            .spawn()
            .map_err(|e| AsrError::Spawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        debug!(program = %self.program, audio = %audio.display(), "Transcriber started");

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let result = tokio::time::timeout(self.timeout, async {
            let read_out = async move {
                let mut buf = Vec::new();
                if let Some(mut out) = stdout {
                    out.read_to_end(&mut buf).await?;
                }
                Ok::<_, std::io::Error>(buf)
            };
            let read_err = async move {
                let mut buf = Vec::new();
                if let Some(mut err) = stderr {
                    err.read_to_end(&mut buf).await?;
                }
                Ok::<_, std::io::Error>(buf)
            };
            let (out, err) = tokio::try_join!(read_out, read_err)?;
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((status, out, err))
        })
        .await;

        let (status, out, err) = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(AsrError::Io(e)),
            Err(_) => {
                let _ = child.kill().await;
                return Err(AsrError::Timeout(self.timeout));
            }
        };

        if !status.success() {
            return Err(AsrError::Failed {
                code: status.code().unwrap_or(-1),
                stderr: excerpt(&String::from_utf8_lossy(&err)),
            });
        }

        let stdout = String::from_utf8_lossy(&out);
        let text = join_segments(stdout.lines());
        info!(program = %self.program, chars = text.chars().count(), "Transcription finished");
        Ok(text)
    }
}

fn excerpt(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.len() <= MAX_STDERR_EXCERPT {
        return trimmed.to_string();
    }
    let mut end = MAX_STDERR_EXCERPT;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}
