//! Shared test utilities: recording fakes for every controller collaborator.

#![allow(dead_code, unused_imports)]

pub mod mock_summarizer;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use summarist::config::Config;
use summarist::export::{ClipboardSink, ExportError, SavePicker, SaveRequest};
use summarist::input::SelectedFile;
use summarist::render::HtmlRenderer;
use summarist::submit::{SubmitError, SummarizeRequest, SummarizeTransport};
use summarist::ui::controller::{Collaborators, SubmissionController};
use summarist::ui::notify::{Notice, NoticeLevel, Notifier};
use summarist::ui::view::{RenderedSummary, ResultsView};

// -- Transport ----------------------------------------------------------------

/// Transport answering from a script and recording every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<String, SubmitError>>>>,
    requests: Arc<Mutex<Vec<SummarizeRequest>>>,
}

impl ScriptedTransport {
    pub fn push_summary(&self, summary: &str) {
        self.responses.lock().push_back(Ok(summary.to_string()));
    }

    pub fn push_error(&self, err: SubmitError) {
        self.responses.lock().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<SummarizeRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl SummarizeTransport for ScriptedTransport {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, SubmitError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Err(SubmitError::MissingSummary))
    }
}

// -- Notices, view, clipboard -------------------------------------------------

#[derive(Clone, Default)]
pub struct RecordingNotifier(Arc<Mutex<Vec<Notice>>>);

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.0.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.0.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.lock().push(notice);
    }
}

#[derive(Clone, Default)]
pub struct RecordingView(Arc<Mutex<Vec<RenderedSummary>>>);

impl RecordingView {
    pub fn shown(&self) -> Vec<RenderedSummary> {
        self.0.lock().clone()
    }
}

impl ResultsView for RecordingView {
    fn show(&mut self, summary: &RenderedSummary) {
        self.0.lock().push(summary.clone());
    }
}

#[derive(Clone, Default)]
pub struct FakeClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl FakeClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock() = fail;
    }
}

impl ClipboardSink for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        if *self.fail.lock() {
            return Err(ExportError::Clipboard("no display".to_string()));
        }
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Save picker returning a fixed answer and recording what it was offered.
pub struct FixedPicker {
    pub answer: Option<PathBuf>,
    pub offered: Vec<SaveRequest>,
}

impl FixedPicker {
    pub fn new(answer: Option<PathBuf>) -> Self {
        Self {
            answer,
            offered: Vec::new(),
        }
    }
}

impl SavePicker for FixedPicker {
    fn pick(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        self.offered.push(request.clone());
        self.answer.clone()
    }
}

// -- Controller harness -------------------------------------------------------

pub struct Harness {
    pub controller: SubmissionController,
    pub transport: ScriptedTransport,
    pub notifier: RecordingNotifier,
    pub view: RecordingView,
    pub clipboard: FakeClipboard,
}

pub fn make_harness() -> Harness {
    make_harness_with(&Config::default())
}

pub fn make_harness_with(config: &Config) -> Harness {
    let transport = ScriptedTransport::default();
    let notifier = RecordingNotifier::default();
    let view = RecordingView::default();
    let clipboard = FakeClipboard::default();

    let controller = SubmissionController::new(
        config,
        Collaborators {
            transport: Arc::new(transport.clone()),
            renderer: Box::new(HtmlRenderer::default()),
            view: Box::new(view.clone()),
            notifier: Arc::new(notifier.clone()),
            clipboard: Box::new(clipboard.clone()),
        },
    );

    Harness {
        controller,
        transport,
        notifier,
        view,
        clipboard,
    }
}

pub fn lecture_file() -> SelectedFile {
    SelectedFile::new("lecture.mp4", vec![0x00, 0x00, 0x00, 0x18, 0x66, 0x74])
}
