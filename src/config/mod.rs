mod catalog;
mod loader;
mod types;

pub use catalog::ProviderCatalog;
pub use loader::ConfigError;
pub use types::{Config, Defaults, Provider, ServiceConfig};
