//! HTTP API server implementation

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::{OpenApi, ToSchema};

use crate::core::client::Translator;
use crate::core::config::TranslatorConfig;
use crate::core::errors::Result;
use crate::core::languages::{LanguageCatalog, LanguageEntry};
use crate::core::models::{TranslationRequest, AUTO_DETECT};
use crate::providers::{self, TranslationProvider};
use crate::server::page::render_catalog;

/// Application state
pub struct AppState {
    translator: Translator,
    catalog: LanguageCatalog,
    page: String,
    default_target: String,
}

impl AppState {
    /// Build state around `provider`; the page is rendered once here
    pub fn new(
        provider: Arc<dyn TranslationProvider>,
        default_target: impl Into<String>,
    ) -> Result<Self> {
        let catalog = LanguageCatalog::from_table(provider.languages());
        let page = render_catalog(&catalog, provider.display_name())?;

        Ok(Self {
            translator: Translator::new(provider),
            catalog,
            page,
            default_target: default_target.into(),
        })
    }
}

/// Translation request body. Omitted or `null` fields take their defaults.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslateBody {
    /// Text to translate; surrounding whitespace is ignored
    pub text: Option<String>,
    /// Source language code, `auto` when omitted
    pub source_language: Option<String>,
    /// Target language code, the configured default when omitted
    pub target_language: Option<String>,
}

impl TranslateBody {
    fn into_request(self, default_target: &str) -> TranslationRequest {
        TranslationRequest::new(self.text.unwrap_or_default())
            .with_source_lang(self.source_language.unwrap_or_else(|| AUTO_DETECT.to_string()))
            .with_target_lang(self.target_language.unwrap_or_else(|| default_target.to_string()))
    }
}

/// Successful translation
#[derive(Serialize, ToSchema)]
pub struct TranslatedResponse {
    /// Translated text
    pub translated_text: String,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Failure message
    pub error: String,
}

/// Both selector views of the catalog
#[derive(Serialize, ToSchema)]
pub struct LanguagesResponse {
    /// Source selector entries, auto-detect included
    pub source: Vec<LanguageEntry>,
    /// Target selector entries
    pub target: Vec<LanguageEntry>,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
    provider: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(translate, languages, health_check),
    components(schemas(
        TranslateBody,
        TranslatedResponse,
        ErrorResponse,
        LanguagesResponse,
        LanguageEntry,
        HealthResponse
    ))
)]
struct ApiDoc;

/// Translator page
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.clone())
}

/// Translation handler
#[utoipa::path(
    post,
    path = "/translate",
    request_body = TranslateBody,
    responses(
        (status = 200, description = "Translated text, empty for blank input", body = TranslatedResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    )
)]
async fn translate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TranslateBody>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected translate request: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid request body: {}", rejection.body_text()),
                }),
            )
                .into_response();
        }
    };

    let request = body.into_request(&state.default_target);
    let outcome = state.translator.translate(&request).await;

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(outcome)).into_response()
}

/// Language listing handler
#[utoipa::path(
    get,
    path = "/languages",
    responses((status = 200, description = "Source and target languages", body = LanguagesResponse))
)]
async fn languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        source: state.catalog.entries().to_vec(),
        target: state.catalog.target_entries().cloned().collect(),
    })
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
        provider: state.translator.provider().name().to_string(),
    })
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate))
        .route("/languages", get(languages))
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Run the HTTP server
pub async fn run_server(config: TranslatorConfig, host: String, port: u16) -> anyhow::Result<()> {
    // One provider handle for the whole process
    let provider = providers::from_config(&config)?;

    let state = Arc::new(AppState::new(provider, config.default_target_language.clone())?);
    let app = router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::{MockProvider, RecordedCall};
    use assert_json_diff::assert_json_eq;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(provider: Arc<MockProvider>) -> Router {
        router(Arc::new(AppState::new(provider, "en").unwrap()))
    }

    async fn post_translate(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/translate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_defaults_and_trimming() {
        let provider = Arc::new(MockProvider::replying("Hola"));
        let (status, body) = post_translate(app_with(provider.clone()), r#"{"text": "  Hello  "}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_json_eq!(body, json!({"translated_text": "Hola"}));
        assert_eq!(
            provider.calls(),
            vec![RecordedCall {
                text: "Hello".to_string(),
                target: "en".to_string(),
                source: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_text_never_calls_provider() {
        let provider = Arc::new(MockProvider::replying("unused"));

        for body in [
            r#"{"text": ""}"#,
            r#"{"text": "   ", "source_language": "fr", "target_language": "de"}"#,
            r#"{}"#,
            r#"{"text": null}"#,
        ] {
            let (status, json) = post_translate(app_with(provider.clone()), body).await;
            assert_eq!(status, StatusCode::OK);
            assert_json_eq!(json, json!({"translated_text": ""}));
        }

        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_languages_passed_through() {
        let provider = Arc::new(MockProvider::replying("Bonjour"));
        let body = r#"{"text": "Hallo", "source_language": "de", "target_language": "fr"}"#;
        let (status, _) = post_translate(app_with(provider.clone()), body).await;

        assert_eq!(status, StatusCode::OK);
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].source.as_deref(), Some("de"));
        assert_eq!(calls[0].target, "fr");
    }

    #[tokio::test]
    async fn test_explicit_auto_uses_detection() {
        let provider = Arc::new(MockProvider::replying("Hi"));
        let body = r#"{"text": "Hola", "source_language": "auto", "target_language": null}"#;
        post_translate(app_with(provider.clone()), body).await;

        let calls = provider.calls();
        assert_eq!(calls[0].source, None);
        assert_eq!(calls[0].target, "en");
    }

    #[tokio::test]
    async fn test_configured_default_target() {
        let provider = Arc::new(MockProvider::replying("Hallo"));
        let app = router(Arc::new(AppState::new(provider.clone(), "de").unwrap()));
        post_translate(app, r#"{"text": "Hello"}"#).await;

        assert_eq!(provider.calls()[0].target, "de");
    }

    #[tokio::test]
    async fn test_provider_failure_is_500() {
        let provider = Arc::new(MockProvider::rate_limited("quota"));
        let (status, body) = post_translate(app_with(provider), r#"{"text": "Hello"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_json_eq!(body, json!({"error": "Translation failed: quota"}));
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let (status, body) = post_translate(app_with(provider.clone()), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body: "));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_index_renders_both_selectors() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let (status, html) = get_body(app_with(provider), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<select id=\"source-language\">"));
        assert!(html.contains("<select id=\"target-language\">"));
        assert!(html.contains("<option value=\"es\">Spanish</option>"));
        assert!(html.contains("<option value=\"&lt;x&gt;\">"));
        assert_eq!(html.matches("<option value=\"auto\">").count(), 1);
        assert!(html.contains("Powered by Mock"));
    }

    #[tokio::test]
    async fn test_languages_endpoint() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let (status, body) = get_body(app_with(provider), "/languages").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["source"].as_array().unwrap().len(), 4);
        assert_eq!(json["source"][0]["code"], "auto");
        assert_eq!(json["target"].as_array().unwrap().len(), 3);
        assert_eq!(json["target"][0], json!({"code": "en", "name": "English"}));
    }

    #[tokio::test]
    async fn test_health_and_openapi() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let (status, body) = get_body(app_with(provider.clone()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["provider"], "mock");
        assert_eq!(json["service"], crate::NAME);
        assert_eq!(json["version"], crate::VERSION);

        let (status, body) = get_body(app_with(provider), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert!(json["paths"]["/translate"]["post"].is_object());
    }
}
