//! ExhaTranslator - minimal web front end for remote translation providers
//!
//! This library serves a translator page and a JSON translation endpoint,
//! delegating the actual translation to a pluggable provider (Google
//! Translate or Doubao).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod providers;
pub mod server;

// Re-export key types for convenience
pub use core::{
    client::Translator,
    config::TranslatorConfig,
    errors::TranslationError,
    languages::{LanguageCatalog, LanguageEntry},
    models::{ProviderKind, TranslationOutcome, TranslationRequest, TranslationResult},
};

pub use providers::{DoubaoProvider, GoogleProvider, TranslationProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
