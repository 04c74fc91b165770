//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ProviderKind, AUTO_DETECT, DEFAULT_TARGET_LANGUAGE};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "exha.toml";

/// Prefix of the environment variables overriding config values
pub const ENV_PREFIX: &str = "EXHA";

const GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const DOUBAO_ENDPOINT: &str = "https://ark.cn-beijing.volces.com/api/v3/responses";
const DOUBAO_MODEL: &str = "doubao-seed-translation-250915";

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Backend used for translations
    pub provider: ProviderKind,
    /// Provider credentials, required by doubao
    pub api_key: String,
    /// Google `translate_a/single` URL
    pub google_endpoint: String,
    /// Ark `responses` URL
    pub doubao_endpoint: String,
    /// Ark model id
    pub doubao_model: String,
    /// Target used when a request names none
    pub default_target_language: String,
    /// Transport timeout of the provider's HTTP client
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Google,
            api_key: String::new(),
            google_endpoint: GOOGLE_ENDPOINT.to_string(),
            doubao_endpoint: DOUBAO_ENDPOINT.to_string(),
            doubao_model: DOUBAO_MODEL.to_string(),
            default_target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            timeout_ms: 30000,
        }
    }
}

impl TranslatorConfig {
    /// Load defaults, then `path` (or `exha.toml` if present), then `EXHA_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("provider", defaults.provider.to_string())?
            .set_default("api_key", defaults.api_key)?
            .set_default("google_endpoint", defaults.google_endpoint)?
            .set_default("doubao_endpoint", defaults.doubao_endpoint)?
            .set_default("doubao_model", defaults.doubao_model)?
            .set_default("default_target_language", defaults.default_target_language)?
            .set_default("timeout_ms", defaults.timeout_ms)?;

        builder = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                builder.add_source(config::File::from(path).required(true))
            }
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let mut config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        // Ark deployments export their key as ARK_API_KEY
        if config.api_key.is_empty() {
            if let Ok(key) = std::env::var("ARK_API_KEY") {
                debug!("Using ARK_API_KEY for provider credentials");
                config.api_key = key;
            }
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider == ProviderKind::Doubao && self.api_key.is_empty() {
            return Err(TranslationError::config(
                "API key is required for the doubao provider (set EXHA_API_KEY or ARK_API_KEY)",
            ));
        }

        if self.endpoint().is_empty() {
            return Err(TranslationError::config("API endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::config("timeout_ms must be greater than 0"));
        }

        let target = self.default_target_language.trim();
        if target.is_empty() || target == AUTO_DETECT {
            return Err(TranslationError::config(
                "default_target_language must name a concrete language",
            ));
        }

        Ok(())
    }

    /// Endpoint of the selected provider
    pub fn endpoint(&self) -> &str {
        match self.provider {
            ProviderKind::Google => &self.google_endpoint,
            ProviderKind::Doubao => &self.doubao_endpoint,
        }
    }
}
