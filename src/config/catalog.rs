//! Provider → model lookup table.

use crate::config::types::Provider;

/// Static mapping from provider name to its ordered model list.
///
/// Lookups for unknown providers yield an empty list rather than an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
}

impl ProviderCatalog {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Models offered by `provider`, in catalog order.
    pub fn models(&self, provider: &str) -> &[String] {
        self.providers
            .iter()
            .find(|p| p.name == provider)
            .map(|p| p.models.as_slice())
            .unwrap_or(&[])
    }

    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.name.as_str())
    }
}

impl From<&crate::config::Config> for ProviderCatalog {
    fn from(config: &crate::config::Config) -> Self {
        Self::new(config.providers.clone())
    }
}
