//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel value for automatic source language detection
pub const AUTO_DETECT: &str = "auto";

/// Source language for a translation: a concrete tag, or auto-detect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLanguage {
    /// Let the provider detect the source language
    Auto,
    /// A concrete provider language tag, e.g. "en"
    Tag(String),
}

impl SourceLanguage {
    /// The concrete tag, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Tag(tag) => Some(tag),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLanguage::Auto)
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLanguage::Auto => write!(f, "{}", AUTO_DETECT),
            SourceLanguage::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

impl FromStr for SourceLanguage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == AUTO_DETECT {
            Ok(SourceLanguage::Auto)
        } else {
            Ok(SourceLanguage::Tag(s.to_string()))
        }
    }
}

/// Diagnostic for one dictionary entry whose translation failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationFailure {
    /// Dictionary key of the failed entry
    pub key: String,
    /// Original value that was submitted for translation
    pub source_text: String,
    /// Source language the entry was submitted with
    pub source_lang: SourceLanguage,
    /// Target language the entry was submitted for
    pub target_lang: String,
    /// Provider error detail
    pub error: String,
}

/// A provider-supported language, as returned by the languages listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Provider language tag, e.g. "fr"
    pub language: String,
    /// Human-readable name, when the provider supplies one
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_language_parse_auto() {
        let lang: SourceLanguage = "auto".parse().unwrap();
        assert_eq!(lang, SourceLanguage::Auto);
        assert!(lang.is_auto());
        assert_eq!(lang.tag(), None);
    }

    #[test]
    fn test_source_language_parse_tag() {
        let lang: SourceLanguage = "en".parse().unwrap();
        assert_eq!(lang, SourceLanguage::Tag("en".to_string()));
        assert_eq!(lang.tag(), Some("en"));
    }

    #[test]
    fn test_source_language_display() {
        assert_eq!(SourceLanguage::Auto.to_string(), "auto");
        assert_eq!(SourceLanguage::Tag("fr".to_string()).to_string(), "fr");
    }
}
