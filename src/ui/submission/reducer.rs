//! Reducer for the submission lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::SubmitIntent;
use super::state::SubmissionState;

pub struct SubmitReducer;

impl Reducer for SubmitReducer {
    type State = SubmissionState;
    type Intent = SubmitIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (SubmissionState::Idle | SubmissionState::Settled { .. }, SubmitIntent::Start) => {
                SubmissionState::Submitting
            }

            (SubmissionState::Submitting, SubmitIntent::Succeeded) => {
                SubmissionState::Settled { error: None }
            }

            (SubmissionState::Submitting, SubmitIntent::Failed { message }) => {
                SubmissionState::Settled {
                    error: Some(message),
                }
            }

            // Completions without a request in flight, or a second start.
            (other, _) => other,
        }
    }
}
