//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned rather than shared, comparable so
/// transitions can be asserted, and defaulted to their resting state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
