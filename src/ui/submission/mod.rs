//! Submission lifecycle feature module.
//!
//! Tracks whether a summarization request is in flight and what the
//! submit control shows.
//!
//! - `state.rs` - lifecycle state enum
//! - `intent.rs` - lifecycle events
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::SubmitIntent;
pub use reducer::SubmitReducer;
pub use state::{SubmissionState, BUSY_LABEL, IDLE_LABEL};
