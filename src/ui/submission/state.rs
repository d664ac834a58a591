//! State for the submission lifecycle.

use crate::ui::mvi::UiState;

/// Submit control label while accepting input.
pub const IDLE_LABEL: &str = "Summarize";

/// Submit control label while a request is in flight.
pub const BUSY_LABEL: &str = "Processing...";

/// Lifecycle of the submit action.
///
/// `Settled` accepts a new submission exactly like `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// Waiting on the service.
    Submitting,

    /// The last request resolved.
    Settled {
        /// Error message from the last attempt, if it failed.
        error: Option<String>,
    },
}

impl UiState for SubmissionState {}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the submit control accepts clicks.
    pub fn is_enabled(&self) -> bool {
        !self.is_in_flight()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_in_flight() {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// Error message from the last settled attempt, if any.
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Settled { error } => error.as_deref(),
            _ => None,
        }
    }
}
