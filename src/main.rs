//! Main entry point for ExhaTranslator

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exha_translator::cli::commands::{self, Commands};
use exha_translator::{ProviderKind, TranslatorConfig};

/// ExhaTranslator - web front end for remote translation providers
#[derive(Parser, Debug)]
#[command(name = "exha-translator", version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to ./exha.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Translation provider, overriding the configuration
    #[arg(long, value_enum)]
    provider: Option<ProviderKind>,

    /// Provider API key (optional, defaults to EXHA_API_KEY / ARK_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let debug_server = matches!(args.command, Some(Commands::Server { debug: true, .. }));
    let log_level = if args.verbose || debug_server { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},tower_http={}",
                    env!("CARGO_CRATE_NAME"),
                    log_level,
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = TranslatorConfig::load(args.config.as_deref())?;

    // Override config with CLI args if provided
    if let Some(provider) = args.provider {
        config.provider = provider;
    }
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }

    // Execute command
    match args.command {
        Some(Commands::Server { host, port, debug }) => {
            commands::handle_server(config, host, port, debug).await?;
        }
        Some(Commands::Translate {
            text,
            source_lang,
            target_lang,
        }) => {
            commands::handle_translate(config, text, source_lang, target_lang).await?;
        }
        Some(Commands::Languages { targets }) => {
            commands::handle_languages(config, targets).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
