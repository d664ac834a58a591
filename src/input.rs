//! Input surface: file selection and the derived input source.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions accepted by the file picker.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov"];
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg", "flac"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Label shown on the input surface when no file is selected.
pub const EMPTY_INPUT_LABEL: &str = "Drag & drop your file here";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unsupported file type '{name}'. Supported: any video, audio, or text file")]
    Unsupported { name: String },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad category of an accepted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Video,
    Audio,
    Text,
}

impl InputKind {
    /// Classify a file name by extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Audio)
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Text)
        } else {
            None
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// A file chosen by the user: its name and full contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, applying the picker's accept filter.
    pub async fn open(path: &Path) -> Result<Self, InputError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if InputKind::from_file_name(&name).is_none() {
            return Err(InputError::Unsupported { name });
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| InputError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(file = %name, size = bytes.len(), "File selected");
        Ok(Self { name, bytes })
    }

    pub fn kind(&self) -> Option<InputKind> {
        InputKind::from_file_name(&self.name)
    }
}

/// The content that would be submitted right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputSource<'a> {
    File(&'a SelectedFile),
    Text(&'a str),
    Empty,
}

impl<'a> InputSource<'a> {
    /// Resolve the active source. A selected file always wins over pasted text.
    pub fn resolve(file: Option<&'a SelectedFile>, text: &'a str) -> Self {
        match file {
            Some(file) => Self::File(file),
            None if !text.is_empty() => Self::Text(text),
            None => Self::Empty,
        }
    }
}
