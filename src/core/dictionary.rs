//! Order-preserving dictionary loading and saving
//!
//! A dictionary is a flat JSON object mapping string keys to string values.
//! Key order is semantically meaningful: the translated output must list its
//! keys in exactly the input file's order.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::Path;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationFailure;

/// An ordered key -> string-value mapping read from a JSON file
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
}

impl Dictionary {
    /// Build a dictionary from already-ordered entries
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Parse a dictionary from a JSON object string, keeping key order
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::String(text) => entries.push((key, text)),
                other => {
                    return Err(TranslationError::InvalidDictionary {
                        message: format!(
                            "value for key '{}' must be a string, got: {}",
                            key, other
                        ),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Load a dictionary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| TranslationError::FileError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// The result of translating one dictionary into one target language.
///
/// Same key set and key order as the input; a `None` value marks an entry
/// whose translation failed (serialized as JSON `null`, never dropped).
#[derive(Debug, Clone)]
pub struct TranslatedDictionary {
    entries: Vec<(String, Option<String>)>,
    /// Diagnostics for the entries whose translation failed
    pub failures: Vec<TranslationFailure>,
}

impl TranslatedDictionary {
    pub fn new(entries: Vec<(String, Option<String>)>, failures: Vec<TranslationFailure>) -> Self {
        Self { entries, failures }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries without a translated value
    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .count()
    }

    /// Keys in canonical (input) order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in canonical (input) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Look up the outcome for a key: `None` if the key is absent,
    /// `Some(None)` if the key's translation failed
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value.as_deref())
    }

    /// Serialize to a pretty-printed JSON object string (4-space indent)
    pub fn to_json_string(&self) -> Result<String> {
        let mut map = Map::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let json_value = match value {
                Some(text) => Value::String(text.clone()),
                None => Value::Null,
            };
            map.insert(key.clone(), json_value);
        }

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        map.serialize(&mut serializer)?;

        String::from_utf8(buffer).map_err(|e| TranslationError::InvalidDictionary {
            message: format!("serialized dictionary is not valid UTF-8: {}", e),
        })
    }

    /// Write the dictionary to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_json_string()?;

        std::fs::write(path, content).map_err(|e| TranslationError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
