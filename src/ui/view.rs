//! Results display area.

use std::io::Write;
use std::path::PathBuf;

/// A summary as handed to the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSummary {
    pub markdown: String,
    pub html: String,
}

/// Displays the latest summary and reveals the results section.
pub trait ResultsView: Send {
    fn show(&mut self, summary: &RenderedSummary);
}

/// Terminal results view.
///
/// Prints the markdown between rules. When a preview path is set, the
/// rendered HTML is also written there as a standalone page.
pub struct TerminalResultsView {
    preview: Option<PathBuf>,
}

impl TerminalResultsView {
    pub fn new(preview: Option<PathBuf>) -> Self {
        Self { preview }
    }

    fn write_preview(&self, html: &str) {
        let Some(path) = &self.preview else {
            return;
        };
        let page = format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Summary</title></head>\n<body>\n{}</body>\n</html>\n",
            html
        );
        match crate::export::write_atomic(path, &page) {
            Ok(()) => tracing::debug!(path = %path.display(), "HTML preview updated"),
            Err(e) => tracing::warn!(error = %e, "Failed to write HTML preview"),
        }
    }
}

impl ResultsView for TerminalResultsView {
    fn show(&mut self, summary: &RenderedSummary) {
        self.write_preview(&summary.html);

        let mut out = std::io::stdout().lock();
        let rule = "─".repeat(60);
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{}", summary.markdown.trim_end());
        let _ = writeln!(out, "{}", rule);
        let _ = out.flush();
    }
}
