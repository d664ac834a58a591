//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (choosing a provider, pressing submit)
/// or completions reported back by background work (a response arriving).
pub trait Intent: Send + 'static {}
