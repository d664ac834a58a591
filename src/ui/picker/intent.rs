use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PickerIntent {
    /// Provider changed; `models` is the catalog entry for it (empty if unknown).
    SelectProvider {
        provider: String,
        models: Vec<String>,
    },
    /// User picked a model from the current list.
    SelectModel { model: String },
}

impl Intent for PickerIntent {}
