//! Cache-aside orchestration for word lookups.
//!
//! [`DictionaryService`] answers lookups from the cache when it can and falls
//! back to the external provider otherwise. Entries the provider knows are
//! written back so the next lookup is served locally; unknown words are
//! reported as successful results with a note and are never cached.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entry::{DictionaryEntry, Meaning, PartOfSpeech, WordForms};
use crate::ports::{DictionaryCache, ExternalDictionary};

/// Failures reported to callers of [`DictionaryService::get_word`].
///
/// Underlying causes (network, storage, serialization) are logged where they
/// occur and never carried in these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The caller supplied an empty word.
    #[error("The word must have a value")]
    InvalidWord,
    /// A collaborator failed while resolving the word.
    #[error("An unexpected error occured")]
    Application,
}

/// The outcome of a successful lookup.
///
/// A word the backend does not know still resolves successfully: the lookup
/// fields are empty and `additional_info` plus `status` describe the miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    pub word: String,
    pub part_of_speech: Vec<PartOfSpeech>,
    pub word_forms: WordForms,
    pub meanings: Vec<Meaning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Where a resolved entry came from. Only freshly fetched entries are written
/// back to the cache.
enum Resolved {
    Cached(DictionaryEntry),
    Fetched(DictionaryEntry),
}

/// Coordinates the cache and the external dictionary for word lookups.
pub struct DictionaryService {
    provider: Arc<dyn ExternalDictionary>,
    cache: Arc<dyn DictionaryCache>,
}

impl DictionaryService {
    pub fn new(provider: Arc<dyn ExternalDictionary>, cache: Arc<dyn DictionaryCache>) -> Self {
        Self { provider, cache }
    }

    /// Resolve `word` into a [`WordResult`].
    ///
    /// The cache key is the word exactly as supplied; no trimming or case
    /// folding is applied anywhere in the flow.
    pub async fn get_word(&self, word: &str) -> Result<WordResult, ServiceError> {
        if word.is_empty() {
            return Err(ServiceError::InvalidWord);
        }

        let (entry, fresh) = match self.resolve(word).await? {
            Resolved::Cached(entry) => (entry, false),
            Resolved::Fetched(entry) => (entry, true),
        };

        if !entry.exists() {
            crate::debug!("no dictionary entry for '{word}'");
            return Ok(WordResult {
                word: word.to_string(),
                part_of_speech: Vec::new(),
                word_forms: WordForms::new(),
                meanings: Vec::new(),
                additional_info: Some(format!(
                    "www.sonaveeb.ee has no matching result for {word}"
                )),
                status: Some(400),
            });
        }

        if fresh {
            let payload = serde_json::to_string(&entry).map_err(|err| {
                crate::error!("could not serialize the entry for '{word}': {err}");
                ServiceError::Application
            })?;
            self.cache.set(word, &payload).await.map_err(|err| {
                crate::error!("could not cache the entry for '{word}': {err}");
                ServiceError::Application
            })?;
        }

        Ok(WordResult {
            word: entry.word,
            part_of_speech: entry.part_of_speech,
            word_forms: entry.word_forms,
            meanings: entry.meanings,
            additional_info: None,
            status: None,
        })
    }

    /// Serve the entry from the cache when present, from the provider
    /// otherwise.
    async fn resolve(&self, word: &str) -> Result<Resolved, ServiceError> {
        let cached = self.cache.get(word).await.map_err(|err| {
            crate::error!("cache lookup for '{word}' failed: {err}");
            ServiceError::Application
        })?;

        if let Some(payload) = cached {
            let entry = serde_json::from_str(&payload).map_err(|err| {
                crate::error!("cached entry for '{word}' is unreadable: {err}");
                ServiceError::Application
            })?;
            crate::debug!("serving '{word}' from the cache");
            return Ok(Resolved::Cached(entry));
        }

        let entry = self.provider.get_word(word).await.map_err(|err| {
            crate::error!("dictionary lookup for '{word}' failed: {err}");
            ServiceError::Application
        })?;
        Ok(Resolved::Fetched(entry))
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
