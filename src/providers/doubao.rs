//! Doubao adapter for the Volcengine Ark `responses` API

use async_trait::async_trait;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::languages::resolve_code;
use crate::core::models::{TranslationResult, AUTO_DETECT};
use crate::providers::{http_client, TranslationProvider};

/// Languages supported by doubao-seed-translation
pub const DOUBAO_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Auto-detect"),
    ("zh", "Chinese (Simplified)"),
    ("zh-Hant", "Chinese (Traditional)"),
    ("en", "English"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("de", "German"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("ar", "Arabic"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("nb", "Norwegian Bokmål"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ro", "Romanian"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
];

/// Codes used by other selectors that Ark knows under another name
const ALIASES: &[(&str, &str)] = &[
    ("zh-cn", "zh"),
    ("zh-tw", "zh-Hant"),
    ("no", "nb"),
];

/// Doubao translation client
#[derive(Debug, Clone)]
pub struct DoubaoProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl DoubaoProvider {
    /// Build from the doubao settings of `config`; the API key is required
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(TranslationError::config("API key is required for the doubao provider"));
        }

        Ok(Self {
            client: http_client(config)?,
            endpoint: config.doubao_endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.doubao_model.clone(),
        })
    }

    fn normalize(input: &str, role: &str) -> Result<&'static str> {
        let lowered = input.trim().to_lowercase();

        ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, code)| *code)
            .or_else(|| resolve_code(DOUBAO_LANGUAGES, &lowered))
            .filter(|code| *code != AUTO_DETECT)
            .ok_or_else(|| TranslationError::UnsupportedLanguage {
                message: format!("invalid {} language", role),
            })
    }

    fn request_body(&self, text: &str, target: &str, source: Option<&str>) -> serde_json::Value {
        let mut options = serde_json::json!({ "target_language": target });
        if let (Some(source), Some(obj)) = (source, options.as_object_mut()) {
            obj.insert("source_language".to_string(), serde_json::json!(source));
        }

        serde_json::json!({
            "model": self.model,
            "input": [{
                "role": "user",
                "content": [{
                    "type": "input_text",
                    "text": text,
                    "translation_options": options
                }]
            }]
        })
    }

    fn parse_response(&self, json: &serde_json::Value) -> Result<TranslationResult> {
        let message = json["output"]["choices"]
            .get(0)
            .map(|c| &c["message"])
            .ok_or_else(|| TranslationError::invalid_response("No translation in response"))?;

        let translation = message["content"]
            .as_str()
            .ok_or_else(|| TranslationError::invalid_response("No translation in response"))?
            .to_string();

        let detected_source_lang = message["detected_source_language"]
            .as_str()
            .map(|s| s.to_string());

        Ok(TranslationResult {
            translation,
            detected_source_lang,
            provider: self.name().to_string(),
        })
    }
}

#[async_trait]
impl TranslationProvider for DoubaoProvider {
    fn name(&self) -> &'static str {
        "doubao"
    }

    fn display_name(&self) -> &'static str {
        "Doubao"
    }

    fn languages(&self) -> &'static [(&'static str, &'static str)] {
        DOUBAO_LANGUAGES
    }

    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<TranslationResult> {
        let target = Self::normalize(target, "destination")?;
        let source = source.map(|code| Self::normalize(code, "source")).transpose()?;

        debug!(
            "Doubao translate {} -> {} with {} ({} chars)",
            source.unwrap_or(AUTO_DETECT),
            target,
            self.model,
            text.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(text, target, source))
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if status.is_success() {
            let json: serde_json::Value = response
                .json()
                .await
                .map_err(|e| TranslationError::invalid_response(e.to_string()))?;

            self.parse_response(&json)
        } else {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            if status_code == 429 {
                return Err(TranslationError::RateLimited {
                    message: if error_text.is_empty() {
                        "Rate limit exceeded".to_string()
                    } else {
                        error_text
                    },
                });
            }

            if error_text.contains("quota") {
                return Err(TranslationError::QuotaExceeded {
                    message: error_text,
                });
            }

            Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            })
        }
    }
}
