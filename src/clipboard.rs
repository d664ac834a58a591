//! System clipboard access for copying results.

use arboard::Clipboard;

use crate::export::{ClipboardSink, ExportError};

/// Handler for clipboard operations.
///
/// The system clipboard is opened on first use so that headless sessions
/// only fail when a copy is actually requested.
///
/// On Linux the copied text is served by this process, so it disappears
/// when the process exits. A handler built with [`ClipboardHandler::held`]
/// blocks on each copy until another program takes over the selection,
/// which is what a process about to exit needs.
#[derive(Default)]
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
    hold_until_read: bool,
}

impl ClipboardHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler whose copies outlive the process.
    pub fn held() -> Self {
        Self {
            clipboard: None,
            hold_until_read: true,
        }
    }

    pub fn holds_until_read(&self) -> bool {
        self.hold_until_read
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, ExportError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| ExportError::Clipboard("clipboard not initialized".to_string()))
    }
}

impl ClipboardSink for ClipboardHandler {
    /// Write text to the system clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        let hold = self.hold_until_read;
        store(self.clipboard()?, text, hold)
            .map_err(|e| ExportError::Clipboard(format!("Failed to set clipboard text: {}", e)))
    }
}

#[cfg(target_os = "linux")]
fn store(clipboard: &mut Clipboard, text: &str, hold: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        tracing::info!("Serving clipboard contents until another program reads them");
        clipboard.set().wait().text(text.to_string())
    } else {
        clipboard.set_text(text.to_string())
    }
}

// Other platforms keep clipboard contents after the process exits.
#[cfg(not(target_os = "linux"))]
fn store(clipboard: &mut Clipboard, text: &str, _hold: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_handler_does_not_hold() {
        assert!(!ClipboardHandler::new().holds_until_read());
    }

    #[test]
    fn held_handler_holds() {
        assert!(ClipboardHandler::held().holds_until_read());
    }
}
