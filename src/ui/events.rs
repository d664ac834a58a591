//! Interactive events and the stdin command reader.

use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::submit::SubmitError;
use crate::ui::controller::OptionField;

pub const HELP_TEXT: &str = "\
Commands:
  file <path>              choose a video, audio or text file
  clear-file               forget the chosen file
  text <content>           paste one line of text (a chosen file takes priority)
  text                     paste several lines; end with a line holding only \".\"
  provider <name>          choose a provider (resets the model)
  model <id>               choose a model of the current provider
  set <option> <value>     option: language, audio_format, prompt
  submit                   send the input for summarization
  copy                     copy the last summary to the clipboard
  save [path]              save the last summary as markdown
  status                   show the current selection
  help                     show this help
  quit                     exit";

/// Everything the interactive runtime reacts to, in arrival order.
#[derive(Debug)]
pub enum UiEvent {
    FileChosen(PathBuf),
    FileCleared,
    TextInput(String),
    ProviderChanged(String),
    ModelChanged(String),
    OptionChanged { field: OptionField, value: String },
    SubmitClicked,
    CopyClicked,
    SaveClicked { target: Option<PathBuf> },
    StatusRequested,
    HelpRequested,
    /// A command line could not be parsed.
    Invalid(String),
    /// Background request resolved.
    SubmissionFinished(Result<String, SubmitError>),
    Quit,
}

/// Line that closes a multi-line `text` block.
pub const TEXT_BLOCK_END: &str = ".";

/// Parse one command line. Blank lines yield `None`.
///
/// The content of `text <content>` is taken verbatim after the single
/// separator following the command.
pub fn parse_command(line: &str) -> Option<UiEvent> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return None;
    }

    let (command, raw_rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    };
    if command == "text" {
        return Some(UiEvent::TextInput(raw_rest.to_string()));
    }
    let rest = raw_rest.trim();

    let event = match (command, rest) {
        ("file", "") => UiEvent::Invalid("Usage: file <path>".to_string()),
        ("file", path) => UiEvent::FileChosen(PathBuf::from(path)),
        ("clear-file", _) => UiEvent::FileCleared,
        ("provider", "") => UiEvent::Invalid("Usage: provider <name>".to_string()),
        ("provider", name) => UiEvent::ProviderChanged(name.to_string()),
        ("model", "") => UiEvent::Invalid("Usage: model <id>".to_string()),
        ("model", id) => UiEvent::ModelChanged(id.to_string()),
        ("set", args) => parse_set(args),
        ("submit", _) => UiEvent::SubmitClicked,
        ("copy", _) => UiEvent::CopyClicked,
        ("save", "") => UiEvent::SaveClicked { target: None },
        ("save", path) => UiEvent::SaveClicked {
            target: Some(PathBuf::from(path)),
        },
        ("status", _) => UiEvent::StatusRequested,
        ("help", _) | ("?", _) => UiEvent::HelpRequested,
        ("quit", _) | ("exit", _) => UiEvent::Quit,
        (other, _) => UiEvent::Invalid(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Some(event)
}

fn parse_set(args: &str) -> UiEvent {
    let Some((name, value)) = args.split_once(char::is_whitespace) else {
        return UiEvent::Invalid("Usage: set <option> <value>".to_string());
    };
    match name.parse::<OptionField>() {
        Ok(field) => UiEvent::OptionChanged {
            field,
            value: value.trim().to_string(),
        },
        Err(message) => UiEvent::Invalid(message),
    }
}

/// Turns input lines into events.
///
/// A bare `text` line opens a block: following lines are pasted text, not
/// commands, until a line holding only `.`.
#[derive(Debug, Default)]
pub struct CommandReader {
    block: Option<Vec<String>>,
}

impl CommandReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) -> Option<UiEvent> {
        if let Some(mut lines) = self.block.take() {
            if line.trim_end() == TEXT_BLOCK_END {
                return Some(UiEvent::TextInput(lines.join("\n")));
            }
            lines.push(line.to_string());
            self.block = Some(lines);
            return None;
        }

        if line.trim() == "text" {
            self.block = Some(Vec::new());
            return None;
        }
        parse_command(line)
    }

    /// Close an unterminated block at end of input, keeping its text.
    pub fn finish(&mut self) -> Option<UiEvent> {
        self.block
            .take()
            .map(|lines| UiEvent::TextInput(lines.join("\n")))
    }
}

/// Channel of `UiEvent`s fed by stdin and background work.
pub struct EventHandler {
    rx: mpsc::Receiver<UiEvent>,
    tx: mpsc::Sender<UiEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(64);
        Self { rx, tx }
    }

    /// Sender for background tasks to post completions.
    pub fn sender(&self) -> mpsc::Sender<UiEvent> {
        self.tx.clone()
    }

    /// Read command lines from stdin until EOF, then post `Quit`.
    pub fn spawn_stdin_reader(&self) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut reader = CommandReader::new();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if let Some(event) = reader.feed(&line) {
                            if tx.send(event).await.is_err() {
                                return;
                            }
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read stdin");
                        break;
                    }
                }
            }
            if let Some(event) = reader.finish() {
                tracing::debug!("Input ended inside a text block");
                let _ = tx.send(event).await;
            }
            let _ = tx.send(UiEvent::Quit).await;
        });
    }

    pub async fn next(&mut self) -> Option<UiEvent> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
