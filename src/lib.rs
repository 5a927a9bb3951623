//! Dictionary Translator - concurrent JSON dictionary translation library
//!
//! Translates the string values of an order-preserving JSON dictionary into
//! other languages through an external translation provider, fanning out one
//! concurrent request per entry and tolerating per-entry failures.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::{TranslateText, TranslationClient},
    config::TranslatorConfig,
    dictionary::{Dictionary, TranslatedDictionary},
    engine::DictionaryTranslator,
    errors::TranslationError,
    models::{LanguageInfo, SourceLanguage, TranslationFailure},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
