//! Mood → sound clip lookup for the voice bot.
//!
//! Clips live in one folder per mood under a root directory:
//!
//! ```text
//! sounds/
//!   tense/drama1.mp3
//!   hype/airhorn.ogg
//!   ...
//! ```
//!
//! Every path handed out is resolved under the root. User-supplied names
//! containing `..`, backslashes or absolute paths are rejected, and the
//! canonical result must still sit inside the canonical root (symlinks
//! included).

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use crate::classifier::{ClassificationResult, Intent, Mood};
use crate::error::SoundError;

/// What the bot should do with its audio player after a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Reaction {
    /// Play a clip, given relative to the sounds root.
    Play { clip: String },
    /// Stop whatever is playing.
    Stop,
    /// Leave playback alone.
    None,
}

/// Folder name holding clips for a mood. `None` for moods without clips.
pub fn mood_folder(mood: Mood) -> Option<&'static str> {
    match mood {
        Mood::Chaos => Some("chaos"),
        Mood::Sad => Some("sad"),
        Mood::Corny => Some("corny"),
        Mood::Hype => Some("hype"),
        Mood::Tense => Some("tense"),
        Mood::Stop | Mood::None => None,
    }
}

/// Sound clip library rooted at one directory.
#[derive(Debug, Clone)]
pub struct SoundBoard {
    root: PathBuf,
}

impl SoundBoard {
    /// Open a sound board. The root must exist.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, SoundError> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|_| SoundError::NotFound(root.display().to_string()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a user-supplied clip name like `tense/drama1.mp3`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, SoundError> {
        if name.trim().is_empty()
            || name.contains("..")
            || name.contains('\\')
            || Path::new(name).is_absolute()
        {
            return Err(SoundError::InvalidPath(name.to_string()));
        }

        let target = self
            .root
            .join(name)
            .canonicalize()
            .map_err(|_| SoundError::NotFound(name.to_string()))?;

        if !target.starts_with(&self.root) {
            return Err(SoundError::InvalidPath(name.to_string()));
        }
        if !target.is_file() {
            return Err(SoundError::NotFound(name.to_string()));
        }
        Ok(target)
    }

    /// Clip names available for a mood, sorted. Empty if the folder is missing.
    pub fn clips_for(&self, mood: Mood) -> Result<Vec<String>, SoundError> {
        let Some(folder) = mood_folder(mood) else {
            return Ok(Vec::new());
        };
        let dir = self.root.join(folder);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut clips = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(file) = entry.file_name().to_str() {
                clips.push(format!("{folder}/{file}"));
            }
        }
        clips.sort();
        Ok(clips)
    }

    /// Pick a random clip for `mood`, already passed through [`SoundBoard::resolve`].
    pub fn pick<R: Rng + ?Sized>(
        &self,
        mood: Mood,
        rng: &mut R,
    ) -> Result<Option<String>, SoundError> {
        let clips = self.clips_for(mood)?;
        match clips.choose(rng) {
            Some(clip) => {
                self.resolve(clip)?;
                Ok(Some(clip.clone()))
            }
            None => Ok(None),
        }
    }

    /// Decide the player action for a classification.
    pub fn react<R: Rng + ?Sized>(
        &self,
        result: &ClassificationResult,
        rng: &mut R,
    ) -> Result<Reaction, SoundError> {
        let reaction = match result.intent() {
            Intent::Stop => Reaction::Stop,
            Intent::None => Reaction::None,
            Intent::Mood => match self.pick(result.mood(), rng)? {
                Some(clip) => Reaction::Play { clip },
                None => Reaction::None,
            },
        };
        debug!(mood = ?result.mood(), reaction = ?reaction, "Reaction chosen");
        Ok(reaction)
    }
}
