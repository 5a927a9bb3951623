//! Concurrent dictionary translation engine
//!
//! Fans out one translation task per dictionary entry, waits for every task to
//! settle, and rebuilds the output in the input's key order. A failed entry is
//! logged and recorded as absent; it never aborts the batch or its siblings.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::core::client::TranslateText;
use crate::core::dictionary::{Dictionary, TranslatedDictionary};
use crate::core::models::{SourceLanguage, TranslationFailure};

/// Translates all values of a dictionary concurrently through a client
#[derive(Debug, Clone)]
pub struct DictionaryTranslator<C> {
    client: Arc<C>,
}

impl<C: TranslateText + Send + Sync + 'static> DictionaryTranslator<C> {
    /// Create a new dictionary translator around a translation client
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Translate every value of `dict` from `source` into `target`.
    ///
    /// One concurrent call is issued per entry, with no batching or
    /// throttling. The returned dictionary has exactly the input's key set
    /// and key order; entries whose translation failed carry no value and a
    /// diagnostic in `failures`. Per-entry failures never fail this call.
    pub async fn translate_dictionary(
        &self,
        dict: &Dictionary,
        source: &SourceLanguage,
        target: &str,
    ) -> TranslatedDictionary {
        // Canonical key order, captured before any task is spawned.
        // Completion order is non-deterministic and must not affect output.
        let canonical_keys: Vec<String> = dict.keys().map(str::to_string).collect();

        if dict.is_empty() {
            return TranslatedDictionary::new(Vec::new(), Vec::new());
        }

        debug!(
            "Dispatching {} translation calls ({} -> {})",
            dict.len(),
            source,
            target
        );

        let mut tasks = JoinSet::new();
        for (key, value) in dict.iter() {
            let client = Arc::clone(&self.client);
            let key = key.to_string();
            let value = value.to_string();
            let source = source.clone();
            let target = target.to_string();

            tasks.spawn(async move {
                let outcome = client.translate(&value, &source, &target).await;
                (key, value, outcome)
            });
        }

        // Each task settles into its own key's slot; one writer per key.
        let mut settled: HashMap<String, String> = HashMap::with_capacity(canonical_keys.len());
        let mut failures = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((key, _value, Ok(translated))) => {
                    settled.insert(key, translated);
                }
                Ok((key, value, Err(err))) => {
                    warn!(
                        "Error translating '{}' (key '{}') from '{}' to '{}': {}",
                        value, key, source, target, err
                    );
                    failures.push(TranslationFailure {
                        key,
                        source_text: value,
                        source_lang: source.clone(),
                        target_lang: target.to_string(),
                        error: err.to_string(),
                    });
                }
                Err(join_err) => {
                    // A panicked task cannot name its key; the key resolves
                    // to an absent value during order re-imposition below.
                    error!("Translation task did not complete: {}", join_err);
                }
            }
        }

        // Re-impose the canonical key order on the completion-ordered results
        let entries = canonical_keys
            .into_iter()
            .map(|key| {
                let value = settled.remove(&key);
                (key, value)
            })
            .collect();

        TranslatedDictionary::new(entries, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{Result, TranslationError};
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Scriptable stand-in for the provider client. Internals are shared so
    /// tests can keep a clone and inspect recorded calls after the
    /// translator takes ownership.
    #[derive(Clone, Default)]
    struct StubTranslator {
        responses: HashMap<String, String>,
        failing_texts: HashSet<String>,
        delays_ms: HashMap<String, u64>,
        calls: Arc<Mutex<Vec<(String, SourceLanguage, String)>>>,
        call_count: Arc<AtomicUsize>,
    }

    impl StubTranslator {
        fn with_response(mut self, text: &str, translation: &str) -> Self {
            self.responses.insert(text.to_string(), translation.to_string());
            self
        }

        fn with_failure(mut self, text: &str) -> Self {
            self.failing_texts.insert(text.to_string());
            self
        }

        fn with_delay(mut self, text: &str, millis: u64) -> Self {
            self.delays_ms.insert(text.to_string(), millis);
            self
        }

        fn calls_made(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        fn recorded_calls(&self) -> Vec<(String, SourceLanguage, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl TranslateText for StubTranslator {
        async fn translate(
            &self,
            text: &str,
            source: &SourceLanguage,
            target: &str,
        ) -> Result<String> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), source.clone(), target.to_string()));

            if let Some(millis) = self.delays_ms.get(text) {
                tokio::time::sleep(Duration::from_millis(*millis)).await;
            }

            if self.failing_texts.contains(text) {
                return Err(TranslationError::ApiError {
                    status: 500,
                    message: format!("simulated failure for '{}'", text),
                });
            }

            Ok(self
                .responses
                .get(text)
                .cloned()
                .unwrap_or_else(|| format!("{}:{}", target, text)))
        }
    }

    fn dict_of(pairs: &[(&str, &str)]) -> Dictionary {
        Dictionary::from_entries(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_empty_dictionary_makes_no_calls() {
        let stub = StubTranslator::default();
        let translator = DictionaryTranslator::new(stub.clone());

        let result = translator
            .translate_dictionary(
                &Dictionary::default(),
                &SourceLanguage::Tag("en".to_string()),
                "fr",
            )
            .await;

        assert!(result.is_empty());
        assert!(result.failures.is_empty());
        assert_eq!(stub.calls_made(), 0);
    }

    #[tokio::test]
    async fn test_preserves_key_order_despite_completion_order() {
        // The first entries finish last; output order must still match input
        let stub = StubTranslator::default()
            .with_delay("one", 80)
            .with_delay("two", 40)
            .with_delay("three", 20);
        let translator = DictionaryTranslator::new(stub.clone());

        let dict = dict_of(&[
            ("First", "one"),
            ("Second", "two"),
            ("Third", "three"),
            ("Fourth", "four"),
            ("Fifth", "five"),
        ]);

        let result = translator
            .translate_dictionary(&dict, &SourceLanguage::Tag("en".to_string()), "fr")
            .await;

        let keys: Vec<&str> = result.keys().collect();
        assert_eq!(keys, vec!["First", "Second", "Third", "Fourth", "Fifth"]);
        assert_eq!(stub.calls_made(), 5);
    }

    #[tokio::test]
    async fn test_failed_entry_is_absent_others_unaffected() {
        let stub = StubTranslator::default()
            .with_response("Hello World", "Bonjour le monde")
            .with_failure("A simple test.");
        let translator = DictionaryTranslator::new(stub.clone());

        let dict = dict_of(&[("Title", "Hello World"), ("Content", "A simple test.")]);

        let result = translator
            .translate_dictionary(&dict, &SourceLanguage::Tag("en".to_string()), "fr")
            .await;

        let keys: Vec<&str> = result.keys().collect();
        assert_eq!(keys, vec!["Title", "Content"]);
        assert_eq!(result.get("Title"), Some(Some("Bonjour le monde")));
        assert_eq!(result.get("Content"), Some(None));

        assert_eq!(result.failures.len(), 1);
        let failure = &result.failures[0];
        assert_eq!(failure.key, "Content");
        assert_eq!(failure.source_text, "A simple test.");
        assert_eq!(failure.source_lang, SourceLanguage::Tag("en".to_string()));
        assert_eq!(failure.target_lang, "fr");
        assert!(failure.error.contains("simulated failure"));
    }

    #[tokio::test]
    async fn test_all_failures_keep_every_key() {
        let stub = StubTranslator::default()
            .with_failure("a")
            .with_failure("b")
            .with_failure("c");
        let translator = DictionaryTranslator::new(stub);

        let dict = dict_of(&[("A", "a"), ("B", "b"), ("C", "c")]);

        let result = translator
            .translate_dictionary(&dict, &SourceLanguage::Tag("en".to_string()), "de")
            .await;

        let keys: Vec<&str> = result.keys().collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert_eq!(result.failed_count(), 3);
        assert_eq!(result.failures.len(), 3);
    }

    #[tokio::test]
    async fn test_auto_detect_is_passed_through_unchanged() {
        let stub = StubTranslator::default().with_response("Hola", "Bonjour");
        let translator = DictionaryTranslator::new(stub.clone());

        let dict = dict_of(&[("Greeting", "Hola")]);

        translator
            .translate_dictionary(&dict, &SourceLanguage::Auto, "fr")
            .await;

        let calls = stub.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Hola");
        assert_eq!(calls[0].1, SourceLanguage::Auto);
        assert_eq!(calls[0].2, "fr");
    }

    #[tokio::test]
    async fn test_empty_string_value_is_still_submitted() {
        let stub = StubTranslator::default().with_response("", "");
        let translator = DictionaryTranslator::new(stub.clone());

        let dict = dict_of(&[("Blank", "")]);

        let result = translator
            .translate_dictionary(&dict, &SourceLanguage::Tag("en".to_string()), "fr")
            .await;

        assert_eq!(stub.calls_made(), 1);
        assert_eq!(result.get("Blank"), Some(Some("")));
    }

    #[tokio::test]
    async fn test_mixed_outcome_under_adversarial_completion() {
        // Slow success, fast failure, fast success: the failure must not
        // cancel the slow in-flight call and order must survive
        let stub = StubTranslator::default()
            .with_response("slow", "lent")
            .with_delay("slow", 60)
            .with_failure("bad")
            .with_response("fast", "rapide");
        let translator = DictionaryTranslator::new(stub.clone());

        let dict = dict_of(&[("Slow", "slow"), ("Bad", "bad"), ("Fast", "fast")]);

        let result = translator
            .translate_dictionary(&dict, &SourceLanguage::Tag("en".to_string()), "fr")
            .await;

        let entries: Vec<(&str, Option<&str>)> = result.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Slow", Some("lent")),
                ("Bad", None),
                ("Fast", Some("rapide")),
            ]
        );
        assert_eq!(stub.calls_made(), 3);
    }
}
