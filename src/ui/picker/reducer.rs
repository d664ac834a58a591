use crate::ui::mvi::Reducer;

use super::intent::PickerIntent;
use super::state::PickerState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::SelectProvider { provider, models } => {
                let selected = if models.is_empty() { None } else { Some(0) };
                PickerState {
                    provider,
                    models,
                    selected,
                }
            }
            PickerIntent::SelectModel { model } => {
                match state.models.iter().position(|m| *m == model) {
                    Some(idx) => PickerState {
                        selected: Some(idx),
                        ..state
                    },
                    None => state,
                }
            }
        }
    }
}
