//! Translation front door shared by the HTTP endpoint and the CLI

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::models::{TranslationOutcome, TranslationRequest};
use crate::providers::TranslationProvider;

/// Prefix of every failure message reported to clients
pub const FAILURE_PREFIX: &str = "Translation failed: ";

/// Wraps the single long-lived provider handle
#[derive(Clone)]
pub struct Translator {
    provider: Arc<dyn TranslationProvider>,
}

impl Translator {
    /// Wrap an already-built provider
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Provider backing this handle
    pub fn provider(&self) -> &dyn TranslationProvider {
        self.provider.as_ref()
    }

    /// Translate one request.
    ///
    /// Whitespace-only text yields an empty translation without contacting
    /// the provider. Otherwise the provider is called exactly once and any
    /// error it raises is folded into a `Failed` outcome.
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
        let text = request.text.trim();
        if text.is_empty() {
            return TranslationOutcome::Translated {
                translated_text: String::new(),
            };
        }

        debug!(
            "Translating {} chars {} -> {} via {}",
            text.chars().count(),
            request.source_lang,
            request.target_lang,
            self.provider.name()
        );

        match self
            .provider
            .translate(text, &request.target_lang, request.explicit_source())
            .await
        {
            Ok(result) => {
                debug!(
                    "Translated via {} (detected source: {})",
                    result.provider,
                    result.detected_source_lang.as_deref().unwrap_or("n/a")
                );
                TranslationOutcome::Translated {
                    translated_text: result.translation,
                }
            }
            Err(e) => {
                warn!("Translation failed: {}", e);
                TranslationOutcome::Failed {
                    error: format!("{}{}", FAILURE_PREFIX, e),
                }
            }
        }
    }
}
