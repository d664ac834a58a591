//! Submission controller: input/option surfaces, request lifecycle, and
//! result export.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::{Config, Defaults, ProviderCatalog};
use crate::export::{
    suggested_file_name, write_atomic, ClipboardSink, ExportError, SavePicker, SaveRequest,
};
use crate::input::{InputSource, SelectedFile, EMPTY_INPUT_LABEL};
use crate::render::MarkdownRenderer;
use crate::submit::{RequestOptions, SubmitError, SummarizeRequest, SummarizeTransport};
use crate::ui::mvi::Reducer;
use crate::ui::notify::{Notice, Notifier};
use crate::ui::picker::{PickerIntent, PickerReducer, PickerState};
use crate::ui::submission::{SubmissionState, SubmitIntent, SubmitReducer};
use crate::ui::view::{RenderedSummary, ResultsView};

pub const NO_INPUT_MESSAGE: &str = "Please upload a file or paste some text.";
pub const IN_FLIGHT_MESSAGE: &str = "A summarization is already in progress.";
pub const SUBMIT_FAILED_MESSAGE: &str = "An error occurred during summarization.";
pub const COPY_OK_MESSAGE: &str = "Results copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy results.";
pub const SAVE_OK_MESSAGE: &str = "File saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save file.";

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Free-form option fields on the option surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Language,
    AudioFormat,
    Prompt,
}

impl FromStr for OptionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" => Ok(Self::Language),
            "audio_format" | "audio-format" => Ok(Self::AudioFormat),
            "prompt" => Ok(Self::Prompt),
            other => Err(format!(
                "Unknown option '{}'. Expected language, audio_format or prompt",
                other
            )),
        }
    }
}

/// Values of the language, audio format and prompt selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSurface {
    pub language: String,
    pub audio_format: String,
    pub prompt: String,
}

impl From<&Defaults> for OptionSurface {
    fn from(defaults: &Defaults) -> Self {
        Self {
            language: defaults.language.clone(),
            audio_format: defaults.audio_format.clone(),
            prompt: defaults.prompt.clone(),
        }
    }
}

/// External services the controller drives.
pub struct Collaborators {
    pub transport: Arc<dyn SummarizeTransport>,
    pub renderer: Box<dyn MarkdownRenderer>,
    pub view: Box<dyn ResultsView>,
    pub notifier: Arc<dyn Notifier>,
    pub clipboard: Box<dyn ClipboardSink>,
}

/// A validated request waiting to be sent.
///
/// Produced by [`SubmissionController::begin_submit`]; the outcome of
/// [`PendingSubmission::send`] goes back through
/// [`SubmissionController::finish_submit`].
pub struct PendingSubmission {
    id: Uuid,
    request: SummarizeRequest,
    transport: Arc<dyn SummarizeTransport>,
}

impl PendingSubmission {
    pub async fn send(self) -> Result<String, SubmitError> {
        tracing::debug!(submission_id = %self.id, "Request dispatched");
        self.transport.summarize(self.request).await
    }
}

pub struct SubmissionController {
    catalog: ProviderCatalog,
    options: OptionSurface,
    /// Provider and model selectors (MVI pattern).
    picker: PickerState,
    file: Option<SelectedFile>,
    pasted_text: String,
    /// Submit control lifecycle (MVI pattern).
    submission: SubmissionState,
    in_flight: Option<Uuid>,
    /// Raw markdown of the last successful summary.
    result: String,
    /// Name of the file that produced `result`; `None` for pasted text.
    result_source: Option<String>,
    results_visible: bool,
    transport: Arc<dyn SummarizeTransport>,
    renderer: Box<dyn MarkdownRenderer>,
    view: Box<dyn ResultsView>,
    notifier: Arc<dyn Notifier>,
    clipboard: Box<dyn ClipboardSink>,
}

impl SubmissionController {
    pub fn new(config: &Config, collaborators: Collaborators) -> Self {
        let mut controller = Self {
            catalog: ProviderCatalog::from(config),
            options: OptionSurface::from(&config.defaults),
            picker: PickerState::default(),
            file: None,
            pasted_text: String::new(),
            submission: SubmissionState::default(),
            in_flight: None,
            result: String::new(),
            result_source: None,
            results_visible: false,
            transport: collaborators.transport,
            renderer: collaborators.renderer,
            view: collaborators.view,
            notifier: collaborators.notifier,
            clipboard: collaborators.clipboard,
        };

        if let Some(client) = config.initial_client().map(str::to_owned) {
            controller.select_provider(&client);
        }
        controller
    }

    // -- Option surface -------------------------------------------------------

    /// Replace the model list with the catalog entry for `name`.
    ///
    /// Unknown providers are accepted and leave an empty model list.
    pub fn select_provider(&mut self, name: &str) {
        let models = self.catalog.models(name).to_vec();
        if models.is_empty() {
            let known: Vec<&str> = self.catalog.provider_names().collect();
            tracing::warn!(provider = %name, ?known, "No models available for provider");
        }
        dispatch_mvi!(
            self,
            picker,
            PickerReducer,
            PickerIntent::SelectProvider {
                provider: name.to_string(),
                models,
            }
        );
    }

    /// Select a model from the current list. Returns false if it isn't listed.
    pub fn select_model(&mut self, model: &str) -> bool {
        if !self.picker.models.iter().any(|m| m == model) {
            self.notify(Notice::error(format!(
                "Model '{}' is not available for {}",
                model, self.picker.provider
            )));
            return false;
        }
        dispatch_mvi!(
            self,
            picker,
            PickerReducer,
            PickerIntent::SelectModel {
                model: model.to_string(),
            }
        );
        true
    }

    pub fn set_option(&mut self, field: OptionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            OptionField::Language => self.options.language = value,
            OptionField::AudioFormat => self.options.audio_format = value,
            OptionField::Prompt => self.options.prompt = value,
        }
    }

    /// Snapshot of the option surface as it is right now.
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            language: self.options.language.clone(),
            audio_format: self.options.audio_format.clone(),
            prompt: self.options.prompt.clone(),
            client: self.picker.provider.clone(),
            model: self.picker.model().to_string(),
        }
    }

    // -- Input surface --------------------------------------------------------

    /// Select or clear the file. Pasted text is kept but a file takes priority.
    pub fn set_input_from_file(&mut self, file: Option<SelectedFile>) {
        if let Some(file) = &file {
            tracing::info!(file = %file.name, size = file.bytes.len(), "File ready");
        }
        self.file = file;
    }

    pub fn set_input_from_text(&mut self, text: impl Into<String>) {
        self.pasted_text = text.into();
    }

    pub fn input_source(&self) -> InputSource<'_> {
        InputSource::resolve(self.file.as_ref(), &self.pasted_text)
    }

    /// Text of the file drop area.
    pub fn input_label(&self) -> String {
        match &self.file {
            Some(file) => format!("File ready: {}", file.name),
            None => EMPTY_INPUT_LABEL.to_string(),
        }
    }

    // -- Submission -----------------------------------------------------------

    /// Validate input, enter `Submitting`, and build the request.
    ///
    /// Rejected while a request is in flight or when there is no input;
    /// rejections notify the user and leave all state unchanged.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.in_flight.is_some() || self.submission.is_in_flight() {
            tracing::warn!("Submit ignored: request already in flight");
            self.notify(Notice::error(IN_FLIGHT_MESSAGE));
            return Err(SubmitError::InFlight);
        }

        let Some(request) =
            SummarizeRequest::build(self.file.as_ref(), &self.pasted_text, self.request_options())
        else {
            self.notify(Notice::error(NO_INPUT_MESSAGE));
            return Err(SubmitError::NoInput);
        };

        let id = Uuid::new_v4();
        tracing::info!(
            submission_id = %id,
            parts = ?request.part_names(),
            client = %request.options.client,
            model = %request.options.model,
            "Submitting for summarization"
        );

        self.in_flight = Some(id);
        dispatch_mvi!(self, submission, SubmitReducer, SubmitIntent::Start);

        Ok(PendingSubmission {
            id,
            request,
            transport: Arc::clone(&self.transport),
        })
    }

    /// Apply the outcome of a pending submission and settle.
    ///
    /// On success the summary becomes the result document, is rendered to
    /// the view, and the input surface is cleared. On failure input and
    /// result are left as they were. Either way the submit control is
    /// re-enabled.
    pub fn finish_submit(&mut self, outcome: Result<String, SubmitError>) -> Result<(), SubmitError> {
        let Some(id) = self.in_flight.take() else {
            tracing::warn!("Submission outcome received with nothing in flight");
            return Ok(());
        };

        match outcome {
            Ok(summary) => {
                tracing::info!(submission_id = %id, summary_len = summary.len(), "Summarization complete");
                let html = self.renderer.render(&summary);
                self.result = summary;
                self.result_source = self.file.as_ref().map(|f| f.name.clone());
                self.view.show(&RenderedSummary {
                    markdown: self.result.clone(),
                    html,
                });
                self.results_visible = true;
                self.file = None;
                self.pasted_text.clear();
                dispatch_mvi!(self, submission, SubmitReducer, SubmitIntent::Succeeded);
                Ok(())
            }
            Err(err) => {
                tracing::error!(submission_id = %id, error = %err, "Summarization failed");
                self.notify(Notice::error(SUBMIT_FAILED_MESSAGE));
                dispatch_mvi!(
                    self,
                    submission,
                    SubmitReducer,
                    SubmitIntent::Failed {
                        message: err.to_string(),
                    }
                );
                Err(err)
            }
        }
    }

    /// Submit and wait for the service in the caller's task.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let pending = self.begin_submit()?;
        let outcome = pending.send().await;
        self.finish_submit(outcome)
    }

    // -- Export ---------------------------------------------------------------

    /// Copy the raw markdown result to the clipboard.
    pub fn copy_result(&mut self) -> Result<(), ExportError> {
        match self.clipboard.write_text(&self.result) {
            Ok(()) => {
                tracing::debug!(len = self.result.len(), "Result copied");
                self.notify(Notice::info(COPY_OK_MESSAGE));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Copy failed");
                self.notify(Notice::error(COPY_FAILED_MESSAGE));
                Err(err)
            }
        }
    }

    /// Ask `picker` for a destination and write the raw markdown result there.
    ///
    /// The suggested name follows the currently selected file, else the file
    /// that produced the result.
    pub fn export_result(&mut self, picker: &mut dyn SavePicker) -> Result<PathBuf, ExportError> {
        let source = self
            .file
            .as_ref()
            .map(|f| f.name.as_str())
            .or(self.result_source.as_deref());
        let request = SaveRequest::markdown(suggested_file_name(source));

        let outcome = match picker.pick(&request) {
            None => Err(ExportError::Cancelled),
            Some(path) => write_atomic(&path, &self.result).map(|()| path),
        };

        match &outcome {
            Ok(path) => {
                tracing::info!(path = %path.display(), "Result saved");
                self.notify(Notice::info(SAVE_OK_MESSAGE));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Save failed");
                self.notify(Notice::error(SAVE_FAILED_MESSAGE));
            }
        }
        outcome
    }

    // -- Accessors ------------------------------------------------------------

    pub fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn options(&self) -> &OptionSurface {
        &self.options
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn pasted_text(&self) -> &str {
        &self.pasted_text
    }

    pub fn submission_state(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// One-line summary of the current surfaces for the `status` command.
    pub fn status_line(&self) -> String {
        let input = match self.input_source() {
            InputSource::File(file) => match file.kind() {
                Some(kind) => format!("{} ({})", self.input_label(), kind),
                None => self.input_label(),
            },
            InputSource::Text(text) => format!("Pasted text ({} chars)", text.chars().count()),
            InputSource::Empty => EMPTY_INPUT_LABEL.to_string(),
        };
        let model = match self.picker.model() {
            "" => "<none>",
            model => model,
        };
        format!(
            "{} | client: {} | model: {} | language: {} | audio: {} | prompt: {} | [{}]",
            input,
            self.picker.provider,
            model,
            self.options.language,
            self.options.audio_format,
            self.options.prompt,
            self.submission.button_label()
        )
    }
}
