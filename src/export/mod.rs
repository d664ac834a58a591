//! Export paths for the result document: clipboard and file save.

mod error;
mod filename;
mod save;

pub use error::ExportError;
pub use filename::{suggested_file_name, DEFAULT_SAVE_NAME};
pub use save::{write_atomic, PathSavePicker, SavePicker, SaveRequest};

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError>;
}
