//! Interactive session loop and event → operation bindings.

use std::path::Path;
use tokio::sync::mpsc;

use crate::export::PathSavePicker;
use crate::input::SelectedFile;
use crate::ui::controller::SubmissionController;
use crate::ui::events::{EventHandler, UiEvent, HELP_TEXT};
use crate::ui::notify::Notice;

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the interactive session until `quit` or end of input.
pub async fn run(mut controller: SubmissionController, base_dir: &Path) {
    let mut events = EventHandler::new();
    events.spawn_stdin_reader();
    let sender = events.sender();

    controller.notify(Notice::info(HELP_TEXT));
    controller.notify(Notice::info(controller.status_line()));

    while let Some(event) = events.next().await {
        if bind_event(&mut controller, event, &sender, base_dir).await == Flow::Quit {
            break;
        }
    }

    if controller.submission_state().is_in_flight() {
        tracing::warn!("Exiting with a summarization still in flight");
    }
}

/// Apply one event to the controller.
///
/// Submissions are sent on a spawned task; their outcome comes back as
/// `UiEvent::SubmissionFinished` through `sender`, so other events keep
/// being handled while the request is pending.
pub async fn bind_event(
    controller: &mut SubmissionController,
    event: UiEvent,
    sender: &mpsc::Sender<UiEvent>,
    base_dir: &Path,
) -> Flow {
    match event {
        UiEvent::FileChosen(path) => {
            let path = if path.is_relative() {
                base_dir.join(path)
            } else {
                path
            };
            match SelectedFile::open(&path).await {
                Ok(file) => {
                    controller.set_input_from_file(Some(file));
                    controller.notify(Notice::info(controller.input_label()));
                }
                Err(e) => controller.notify(Notice::error(e.to_string())),
            }
        }
        UiEvent::FileCleared => {
            controller.set_input_from_file(None);
            controller.notify(Notice::info(controller.input_label()));
        }
        UiEvent::TextInput(text) => controller.set_input_from_text(text),
        UiEvent::ProviderChanged(name) => {
            controller.select_provider(&name);
            controller.notify(Notice::info(format!(
                "Models: {}",
                describe_models(&controller.picker().models)
            )));
        }
        UiEvent::ModelChanged(model) => {
            controller.select_model(&model);
        }
        UiEvent::OptionChanged { field, value } => controller.set_option(field, value),
        UiEvent::SubmitClicked => {
            if let Ok(pending) = controller.begin_submit() {
                controller.notify(Notice::info(controller.submission_state().button_label()));
                let sender = sender.clone();
                tokio::spawn(async move {
                    let outcome = pending.send().await;
                    if sender.send(UiEvent::SubmissionFinished(outcome)).await.is_err() {
                        tracing::debug!("Session closed before submission finished");
                    }
                });
            }
        }
        UiEvent::SubmissionFinished(outcome) => {
            // Errors are already reported to the user by the controller.
            let _ = controller.finish_submit(outcome);
        }
        UiEvent::CopyClicked => {
            let _ = controller.copy_result();
        }
        UiEvent::SaveClicked { target } => {
            let mut picker = PathSavePicker::new(target, base_dir);
            let _ = controller.export_result(&mut picker);
        }
        UiEvent::StatusRequested => controller.notify(Notice::info(controller.status_line())),
        UiEvent::HelpRequested => controller.notify(Notice::info(HELP_TEXT)),
        UiEvent::Invalid(message) => controller.notify(Notice::error(message)),
        UiEvent::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn describe_models(models: &[String]) -> String {
    if models.is_empty() {
        "<none>".to_string()
    } else {
        models.join(", ")
    }
}
