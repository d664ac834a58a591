use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default = "default_providers")]
    pub providers: Vec<Provider>,
}

/// Remote summarization service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Full URL of the summarize endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Deadline for the whole request. Unset means wait indefinitely.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
}

/// Initial values of the option surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_audio_format")]
    pub audio_format: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Provider selected at startup. Falls back to the first configured provider.
    #[serde(default)]
    pub client: Option<String>,
}

/// A summarization provider and the models it offers, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Provider key sent as the `client` field (e.g., "OpenRouter").
    pub name: String,
    #[serde(default)]
    pub models: Vec<String>,
}

impl Provider {
    pub fn new(name: impl Into<String>, models: &[&str]) -> Self {
        Self {
            name: name.into(),
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8000/summarize".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_language() -> String {
    "en".to_string()
}

fn default_audio_format() -> String {
    "wav".to_string()
}

fn default_prompt() -> String {
    "Thematic".to_string()
}

fn default_providers() -> Vec<Provider> {
    vec![
        Provider::new("OpenRouter", &["google/gemini-2.0-pro-exp-02-05:free"]),
        Provider::new("Together", &["meta-llama/Llama-3.3-70B-Instruct-Turbo"]),
    ]
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            audio_format: default_audio_format(),
            prompt: default_prompt(),
            client: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            defaults: Defaults::default(),
            providers: default_providers(),
        }
    }
}

impl Config {
    /// Provider selected at startup: the configured default, else the first provider.
    pub fn initial_client(&self) -> Option<&str> {
        self.defaults
            .client
            .as_deref()
            .or_else(|| self.providers.first().map(|p| p.name.as_str()))
    }
}
