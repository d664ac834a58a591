//! Intents for the submission lifecycle.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SubmitIntent {
    /// A valid submission was sent.
    Start,

    /// The service returned a summary.
    Succeeded,

    /// The request failed (transport, status, or response shape).
    Failed {
        /// Error message.
        message: String,
    },
}

impl Intent for SubmitIntent {}
