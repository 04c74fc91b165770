//! Translation provider adapters

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::core::config::TranslatorConfig;
use crate::core::errors::Result;
use crate::core::models::{ProviderKind, TranslationResult};

pub mod doubao;
pub mod google;

#[cfg(test)]
pub mod mock;

pub use doubao::DoubaoProvider;
pub use google::GoogleProvider;

/// A remote translation backend.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Short identifier, e.g. `google`
    fn name(&self) -> &'static str;

    /// Human readable name for the page footer
    fn display_name(&self) -> &'static str;

    /// Languages this backend accepts, in selector order
    fn languages(&self) -> &'static [(&'static str, &'static str)];

    /// Translate `text` into `target`. `source` is `None` for auto-detection.
    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<TranslationResult>;
}

/// Build the shared HTTP client used by the adapters
pub(crate) fn http_client(config: &TranslatorConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .pool_max_idle_per_host(10)
        .build()?;
    Ok(client)
}

/// Create the provider selected by `config`
pub fn from_config(config: &TranslatorConfig) -> Result<Arc<dyn TranslationProvider>> {
    config.validate()?;

    let provider: Arc<dyn TranslationProvider> = match config.provider {
        ProviderKind::Google => Arc::new(GoogleProvider::new(config)?),
        ProviderKind::Doubao => Arc::new(DoubaoProvider::new(config)?),
    };

    info!(
        "Using {} provider at {} ({} languages)",
        provider.name(),
        config.endpoint(),
        provider.languages().len()
    );

    Ok(provider)
}
