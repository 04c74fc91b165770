//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::Translator;
use crate::core::config::TranslatorConfig;
use crate::core::languages::LanguageCatalog;
use crate::core::models::{TranslationOutcome, TranslationRequest, AUTO_DETECT};
use crate::providers;

/// Commands for ExhaTranslator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8080)
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate a single text and print the result
    Translate {
        /// Text to translate
        text: String,

        /// Source language (default: auto)
        #[arg(short, long, default_value = AUTO_DETECT)]
        source_lang: String,

        /// Target language (defaults to the configured target)
        #[arg(short, long)]
        target_lang: Option<String>,
    },

    /// List the languages of the configured provider
    Languages {
        /// Show the target selector view, without auto-detect
        #[arg(long)]
        targets: bool,
    },
}

/// Handle server command
pub async fn handle_server(
    config: TranslatorConfig,
    host: String,
    port: u16,
    debug: bool,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if debug {
        info!("Debug mode enabled");
    }

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);
    println!("📄 OpenAPI document: http://{}:{}/api-docs/openapi.json", host, port);

    run_server(config, host, port).await?;

    Ok(())
}

/// Handle one-shot translation command
pub async fn handle_translate(
    config: TranslatorConfig,
    text: String,
    source_lang: String,
    target_lang: Option<String>,
) -> anyhow::Result<()> {
    let target_lang = target_lang.unwrap_or_else(|| config.default_target_language.clone());
    let translator = Translator::new(providers::from_config(&config)?);

    let request = TranslationRequest::new(text)
        .with_source_lang(source_lang)
        .with_target_lang(target_lang);

    match translator.translate(&request).await {
        TranslationOutcome::Translated { translated_text } => {
            println!("{}", translated_text);
            Ok(())
        }
        TranslationOutcome::Failed { error } => anyhow::bail!(error),
    }
}

/// Handle languages command
pub async fn handle_languages(config: TranslatorConfig, targets: bool) -> anyhow::Result<()> {
    let provider = providers::from_config(&config)?;
    let catalog = LanguageCatalog::from_table(provider.languages());

    let entries: Vec<_> = if targets {
        catalog.target_entries().collect()
    } else {
        catalog.entries().iter().collect()
    };

    for entry in &entries {
        println!("{:<8} {}", entry.code, entry.name);
    }
    info!("{} languages from {}", entries.len(), provider.name());

    Ok(())
}
