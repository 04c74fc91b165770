//! Recording provider for tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationResult;
use crate::providers::TranslationProvider;

const MOCK_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Auto-detect"),
    ("en", "English"),
    ("es", "Spanish"),
    ("<x>", "Tag & \"Quote\""),
];

/// Arguments of one `translate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Trimmed text
    pub text: String,
    /// Target code as given
    pub target: String,
    /// `None` for auto-detect
    pub source: Option<String>,
}

enum Reply {
    Text(String),
    RateLimited(String),
}

/// Provider that records its calls and answers with a canned reply
pub struct MockProvider {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockProvider {
    /// Answer every call with `text`
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with a rate-limit error
    pub fn rate_limited(message: &str) -> Self {
        Self {
            reply: Reply::RateLimited(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls seen so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock"
    }

    fn languages(&self) -> &'static [(&'static str, &'static str)] {
        MOCK_LANGUAGES
    }

    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<TranslationResult> {
        self.calls.lock().unwrap().push(RecordedCall {
            text: text.to_string(),
            target: target.to_string(),
            source: source.map(|s| s.to_string()),
        });

        match &self.reply {
            Reply::Text(translation) => Ok(TranslationResult {
                translation: translation.clone(),
                detected_source_lang: None,
                provider: self.name().to_string(),
            }),
            Reply::RateLimited(message) => Err(TranslationError::RateLimited {
                message: message.clone(),
            }),
        }
    }
}
