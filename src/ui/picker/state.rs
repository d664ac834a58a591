use crate::ui::mvi::UiState;

/// Contents of the provider and model selectors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickerState {
    pub provider: String,
    /// Always the catalog list for `provider`.
    pub models: Vec<String>,
    /// Index into `models`; `None` when the list is empty.
    pub selected: Option<usize>,
}

impl UiState for PickerState {}

impl PickerState {
    /// Currently selected model id, or an empty string with no selection.
    pub fn model(&self) -> &str {
        self.selected
            .and_then(|idx| self.models.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}
