//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel source language asking the provider to detect the language itself
pub const AUTO_DETECT: &str = "auto";

/// Target language used when a request does not name one
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Backend used to perform translations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Translate public web endpoint
    Google,
    /// Volcengine Ark doubao-seed-translation model
    Doubao,
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::Google
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Google => write!(f, "google"),
            ProviderKind::Doubao => write!(f, "doubao"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "doubao" => Ok(ProviderKind::Doubao),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Source language code or `auto`
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
}

impl TranslationRequest {
    /// Request with auto-detected source and the default target language
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: AUTO_DETECT.to_string(),
            target_lang: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }

    /// Set the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Set the target language
    pub fn with_target_lang(mut self, target_lang: impl Into<String>) -> Self {
        self.target_lang = target_lang.into();
        self
    }

    /// Source language to hand to a provider; `None` selects auto-detection
    pub fn explicit_source(&self) -> Option<&str> {
        if self.source_lang == AUTO_DETECT {
            None
        } else {
            Some(&self.source_lang)
        }
    }
}

/// Provider output for a single translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Translated text
    pub translation: String,
    /// Source language reported by the provider, if any
    pub detected_source_lang: Option<String>,
    /// Short name of the provider that produced it
    pub provider: String,
}

/// Outcome reported to clients: exactly one of a translation or an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationOutcome {
    /// Successful translation (possibly empty)
    Translated {
        /// Translated text
        translated_text: String,
    },
    /// Provider failure, prefixed with `Translation failed: `
    Failed {
        /// Client-facing failure message
        error: String,
    },
}

impl TranslationOutcome {
    /// Whether this carries a translation
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationOutcome::Translated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let request = TranslationRequest::new("Hello");
        assert_eq!(request.source_lang, "auto");
        assert_eq!(request.target_lang, "en");
        assert_eq!(request.explicit_source(), None);
    }

    #[test]
    fn test_explicit_source() {
        let request = TranslationRequest::new("Hallo").with_source_lang("de");
        assert_eq!(request.explicit_source(), Some("de"));
    }

    #[test]
    fn test_outcome_wire_shape() {
        let ok = TranslationOutcome::Translated {
            translated_text: "Hola".to_string(),
        };
        assert_json_eq!(serde_json::to_value(&ok).unwrap(), json!({"translated_text": "Hola"}));

        let failed = TranslationOutcome::Failed {
            error: "Translation failed: quota".to_string(),
        };
        assert_json_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"error": "Translation failed: quota"})
        );
        assert!(!failed.is_success());
    }

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("Google".parse::<ProviderKind>(), Ok(ProviderKind::Google));
        assert_eq!("doubao".parse::<ProviderKind>(), Ok(ProviderKind::Doubao));
        assert!("deepl".parse::<ProviderKind>().is_err());
        assert_eq!(ProviderKind::Doubao.to_string(), "doubao");
    }
}
