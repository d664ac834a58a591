//! Command-line surface: argument parsing, wiring, and one-shot mode.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::bail;
use clap::{ArgGroup, Parser};

use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::export::PathSavePicker;
use crate::input::SelectedFile;
use crate::render::HtmlRenderer;
use crate::submit::{HttpTransport, SubmitError};
use crate::ui::controller::{Collaborators, OptionField, SubmissionController};
use crate::ui::notify::{Notice, TerminalNotifier};
use crate::ui::view::TerminalResultsView;

const CLIPBOARD_WAIT_MESSAGE: &str =
    "Summary is on the clipboard until it is pasted elsewhere (Ctrl+C to stop).";

#[derive(Debug, Parser)]
#[command(
    name = "summarist",
    version,
    about = "Summarize video, audio or text with a remote summarization service",
    long_about = "Summarize video, audio or text with a remote summarization service.\n\n\
                  With --file or --text the input is submitted once and the summary printed.\n\
                  Without them an interactive session starts; type 'help' for commands."
)]
#[command(group(ArgGroup::new("input").args(["file", "text"]).multiple(true)))]
pub struct Cli {
    /// Config file (default: ~/.config/summarist/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the summarize endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Give up on the request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u32>,

    /// Video, audio or text file to summarize (takes priority over --text)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Text to summarize
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Provider sent as the client field
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Model of the selected provider
    #[arg(long, value_name = "ID")]
    pub model: Option<String>,

    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    #[arg(long, value_name = "FORMAT")]
    pub audio_format: Option<String>,

    /// Prompt style (e.g. Thematic, Priority)
    #[arg(long, value_name = "NAME")]
    pub prompt: Option<String>,

    /// Copy the summary to the clipboard
    #[arg(long, requires = "input")]
    pub copy: bool,

    /// Save the summary as markdown (file or directory)
    #[arg(long, value_name = "PATH", requires = "input")]
    pub save: Option<PathBuf>,

    /// Also write the rendered summary as an HTML page
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,
}

impl Cli {
    /// Submit once and exit instead of starting a session.
    pub fn is_one_shot(&self) -> bool {
        self.file.is_some() || self.text.is_some()
    }

    /// Load the config file and apply service overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout {
            config.service.request_timeout_seconds = Some(secs);
        }
        config.validate()?;
        Ok(config)
    }

    /// Clipboard for this run. A one-shot copy must outlive the process.
    pub fn clipboard(&self) -> ClipboardHandler {
        if self.is_one_shot() && self.copy {
            ClipboardHandler::held()
        } else {
            ClipboardHandler::new()
        }
    }

    /// Apply provider, model and option flags to the controller.
    ///
    /// Returns false if the requested model is not offered by the provider.
    pub fn apply_selection(&self, controller: &mut SubmissionController) -> bool {
        if let Some(provider) = &self.provider {
            controller.select_provider(provider);
        }
        let fields = [
            (OptionField::Language, &self.language),
            (OptionField::AudioFormat, &self.audio_format),
            (OptionField::Prompt, &self.prompt),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                controller.set_option(field, value.clone());
            }
        }
        match &self.model {
            Some(model) => controller.select_model(model),
            None => true,
        }
    }
}

/// Wire the controller to the terminal, clipboard and HTTP transport.
pub fn build_controller(config: &Config, cli: &Cli) -> Result<SubmissionController, SubmitError> {
    let transport = HttpTransport::new(&config.service)?;
    tracing::debug!(endpoint = %transport.endpoint(), "Transport ready");
    let clipboard = cli.clipboard();
    tracing::debug!(held = clipboard.holds_until_read(), "Clipboard handler ready");

    Ok(SubmissionController::new(
        config,
        Collaborators {
            transport: Arc::new(transport),
            renderer: Box::new(HtmlRenderer::default()),
            view: Box::new(TerminalResultsView::new(cli.preview.clone())),
            notifier: Arc::new(TerminalNotifier),
            clipboard: Box::new(clipboard),
        },
    ))
}

/// Submit the input given on the command line, then copy/save as requested.
pub async fn run_once(
    controller: &mut SubmissionController,
    cli: &Cli,
    base_dir: &Path,
) -> anyhow::Result<()> {
    if !cli.apply_selection(controller) {
        bail!("model not available for the selected provider");
    }

    if let Some(path) = &cli.file {
        let file = SelectedFile::open(&base_dir.join(path)).await?;
        controller.set_input_from_file(Some(file));
    }
    if let Some(text) = &cli.text {
        controller.set_input_from_text(text.clone());
    }

    controller.submit().await?;

    // Save first: a held clipboard copy blocks until it is read.
    if let Some(target) = &cli.save {
        let mut picker = PathSavePicker::new(Some(target.clone()), base_dir);
        controller.export_result(&mut picker)?;
    }
    if cli.copy {
        if cfg!(target_os = "linux") {
            controller.notify(Notice::info(CLIPBOARD_WAIT_MESSAGE));
        }
        controller.copy_result()?;
    }
    Ok(())
}
