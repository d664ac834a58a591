use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while handing the result to the clipboard or a file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Save cancelled")]
    Cancelled,

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
