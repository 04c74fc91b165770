//! Google Translate adapter using the public `client=gtx` endpoint

use async_trait::async_trait;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::languages::resolve_code;
use crate::core::models::{TranslationResult, AUTO_DETECT};
use crate::providers::{http_client, TranslationProvider};

/// Languages accepted by Google Translate
pub const GOOGLE_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Auto-detect"),
    ("af", "Afrikaans"),
    ("sq", "Albanian"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("hy", "Armenian"),
    ("az", "Azerbaijani"),
    ("eu", "Basque"),
    ("be", "Belarusian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("ceb", "Cebuano"),
    ("ny", "Chichewa"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("co", "Corsican"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("et", "Estonian"),
    ("tl", "Filipino"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fy", "Frisian"),
    ("gl", "Galician"),
    ("ka", "Georgian"),
    ("de", "German"),
    ("el", "Greek"),
    ("gu", "Gujarati"),
    ("ht", "Haitian Creole"),
    ("ha", "Hausa"),
    ("haw", "Hawaiian"),
    ("iw", "Hebrew"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hmn", "Hmong"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("ig", "Igbo"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("kn", "Kannada"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("ku", "Kurdish (Kurmanji)"),
    ("ky", "Kyrgyz"),
    ("lo", "Lao"),
    ("la", "Latin"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("lb", "Luxembourgish"),
    ("mk", "Macedonian"),
    ("mg", "Malagasy"),
    ("ms", "Malay"),
    ("ml", "Malayalam"),
    ("mt", "Maltese"),
    ("mi", "Maori"),
    ("mr", "Marathi"),
    ("mn", "Mongolian"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("or", "Odia"),
    ("ps", "Pashto"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pa", "Punjabi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sm", "Samoan"),
    ("gd", "Scots Gaelic"),
    ("sr", "Serbian"),
    ("st", "Sesotho"),
    ("sn", "Shona"),
    ("sd", "Sindhi"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("es", "Spanish"),
    ("su", "Sundanese"),
    ("sw", "Swahili"),
    ("sv", "Swedish"),
    ("tg", "Tajik"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("ug", "Uyghur"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("xh", "Xhosa"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("zu", "Zulu"),
];

/// Codes Google answers to under a different name
const SPECIAL_CASES: &[(&str, &str)] = &[("ee", "et")];

/// Google Translate client
#[derive(Debug, Clone)]
pub struct GoogleProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleProvider {
    /// Build from the google settings of `config`
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config)?,
            endpoint: config.google_endpoint.clone(),
        })
    }

    /// Map user input to a Google code. `role` is `source` or `destination`.
    fn normalize(input: &str, role: &str) -> Result<&'static str> {
        let lowered = input.trim().to_lowercase();
        let code = lowered.split('_').next().unwrap_or_default();

        if code == AUTO_DETECT {
            return if role == "source" {
                Ok(AUTO_DETECT)
            } else {
                Err(invalid_language(role))
            };
        }

        if let Some((_, mapped)) = SPECIAL_CASES.iter().find(|(from, _)| *from == code) {
            return Ok(*mapped);
        }

        resolve_code(GOOGLE_LANGUAGES, code)
            .or_else(|| resolve_code(GOOGLE_LANGUAGES, &lowered))
            .filter(|resolved| *resolved != AUTO_DETECT)
            .ok_or_else(|| invalid_language(role))
    }

    /// Concatenate the translated segments of a `translate_a/single` reply
    fn parse_response(json: &serde_json::Value) -> Result<(String, Option<String>)> {
        let sentences = json
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| TranslationError::invalid_response("Invalid response format from Google"))?;

        let translation: String = sentences
            .iter()
            .filter_map(|sentence| sentence.get(0).and_then(|s| s.as_str()))
            .collect();

        let detected = json.get(2).and_then(|v| v.as_str()).map(|s| s.to_string());

        Ok((translation, detected))
    }
}

fn invalid_language(role: &str) -> TranslationError {
    TranslationError::UnsupportedLanguage {
        message: format!("invalid {} language", role),
    }
}

#[async_trait]
impl TranslationProvider for GoogleProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    fn display_name(&self) -> &'static str {
        "Google Translate"
    }

    fn languages(&self) -> &'static [(&'static str, &'static str)] {
        GOOGLE_LANGUAGES
    }

    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<TranslationResult> {
        let target = Self::normalize(target, "destination")?;
        let source = match source {
            Some(code) => Self::normalize(code, "source")?,
            None => AUTO_DETECT,
        };

        debug!("Google translate {} -> {} ({} chars)", source, target, text.chars().count());

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
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

            let (translation, detected_source_lang) = Self::parse_response(&json)?;

            Ok(TranslationResult {
                translation,
                detected_source_lang,
                provider: self.name().to_string(),
            })
        } else {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            if status_code == 429 {
                return Err(TranslationError::RateLimited {
                    message: if error_text.is_empty() {
                        "Too many requests (HTTP 429)".to_string()
                    } else {
                        error_text
                    },
                });
            }

            Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            })
        }
    }
}
