//! HTTP transport for the summarize endpoint.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::config::ServiceConfig;

use super::error::SubmitError;
use super::request::{RequestContent, SummarizeRequest, FILE_PART, TEXT_PART};

/// Sends a built request to the summarization service.
///
/// Implementations return the markdown summary on success. Anything else
/// (transport failure, non-2xx status, unexpected body) is an error.
#[async_trait]
pub trait SummarizeTransport: Send + Sync {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, SubmitError>;
}

/// Success body of the summarize endpoint.
#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    #[serde(default)]
    summary: Option<String>,
}

/// Transport posting multipart forms with reqwest.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ServiceConfig) -> Result<Self, SubmitError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64));
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs as u64));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(request: SummarizeRequest) -> Form {
        let form = match request.content {
            RequestContent::File { name, bytes } => {
                Form::new().part(FILE_PART, Part::bytes(bytes).file_name(name))
            }
            RequestContent::Text(text) => Form::new().text(TEXT_PART, text),
        };

        request
            .options
            .fields()
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value.to_string()))
    }
}

#[async_trait]
impl SummarizeTransport for HttpTransport {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, SubmitError> {
        tracing::debug!(
            url = %self.endpoint,
            parts = ?request.part_names(),
            client = %request.options.client,
            model = %request.options.model,
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(Self::build_form(request))
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Summarization service error"
            );

            return Err(SubmitError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let body: SummarizeResponse = serde_json::from_str(&response_text).map_err(|e| {
            SubmitError::ParseError(format!("Failed to parse response JSON: {}", e))
        })?;

        let summary = body.summary.ok_or(SubmitError::MissingSummary)?;
        tracing::info!(latency_ms, summary_len = summary.len(), "Summary received");
        Ok(summary)
    }
}
