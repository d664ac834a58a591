//! Submission to the remote summarization service.
//!
//! - `request.rs` - multipart request construction
//! - `client.rs` - transport trait and reqwest implementation
//! - `error.rs` - failure taxonomy

mod client;
mod error;
mod request;

pub use client::{HttpTransport, SummarizeTransport};
pub use error::SubmitError;
pub use request::{
    RequestContent, RequestOptions, SummarizeRequest, FILE_PART, OPTION_PARTS, TEXT_PART,
};
