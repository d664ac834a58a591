//! Request construction for the summarize endpoint.

use crate::input::{InputSource, SelectedFile};

/// Multipart field names, in the order they are appended.
pub const FILE_PART: &str = "file";
pub const TEXT_PART: &str = "text";
pub const OPTION_PARTS: [&str; 5] = ["language", "audio_format", "prompt", "client", "model"];

/// User-chosen parameters sent alongside the content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestOptions {
    pub language: String,
    pub audio_format: String,
    pub prompt: String,
    pub client: String,
    pub model: String,
}

impl RequestOptions {
    /// Named form fields, one per option.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            (OPTION_PARTS[0], self.language.as_str()),
            (OPTION_PARTS[1], self.audio_format.as_str()),
            (OPTION_PARTS[2], self.prompt.as_str()),
            (OPTION_PARTS[3], self.client.as_str()),
            (OPTION_PARTS[4], self.model.as_str()),
        ]
    }
}

/// Content part of the request. Exactly one is ever sent.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestContent {
    File { name: String, bytes: Vec<u8> },
    Text(String),
}

/// A fully built request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizeRequest {
    pub content: RequestContent,
    pub options: RequestOptions,
}

impl SummarizeRequest {
    /// Build a request from the current input surface.
    ///
    /// A selected file takes precedence over pasted text; the text part is
    /// omitted whenever a file is present. Returns `None` for empty input.
    pub fn build(file: Option<&SelectedFile>, text: &str, options: RequestOptions) -> Option<Self> {
        let content = match InputSource::resolve(file, text) {
            InputSource::File(file) => RequestContent::File {
                name: file.name.clone(),
                bytes: file.bytes.clone(),
            },
            InputSource::Text(text) => RequestContent::Text(text.to_string()),
            InputSource::Empty => return None,
        };
        Some(Self { content, options })
    }

    /// Names of every multipart part this request will carry.
    pub fn part_names(&self) -> Vec<&'static str> {
        let content = match self.content {
            RequestContent::File { .. } => FILE_PART,
            RequestContent::Text(_) => TEXT_PART,
        };
        std::iter::once(content).chain(OPTION_PARTS).collect()
    }
}
