//! Port traits for the lookup pipeline.
//!
//! These traits define the interface between the dictionary service and its
//! collaborators, allowing the service to be decoupled from any specific
//! provider or cache storage engine.

use async_trait::async_trait;

use crate::entry::DictionaryEntry;

/// Errors surfaced by external dictionary providers.
///
/// Providers must not panic across the port boundary; every failure is
/// reported through one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The request to the dictionary source failed (network, timeout, status).
    #[error("dictionary request failed: {0}")]
    Request(String),
    /// The source responded but the payload could not be interpreted.
    #[error("could not interpret the dictionary response: {0}")]
    Parse(String),
}

/// Backend trait for word lookups against an external dictionary source.
///
/// Implementations are free to use network I/O. The live implementation is
/// [`SonaveebDictionary`](crate::sonaveeb::SonaveebDictionary); the offline
/// implementation is [`InMemoryDictionary`](crate::inmemory::InMemoryDictionary).
#[async_trait]
pub trait ExternalDictionary: Send + Sync {
    /// Look up a word, producing a complete entry.
    ///
    /// A word the source does not know yields an entry whose lookup fields
    /// are all empty (see [`DictionaryEntry::exists`]), not an error.
    async fn get_word(&self, word: &str) -> Result<DictionaryEntry, ProviderError>;
}

/// Errors surfaced by cache adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// The cached value could not be read.
    #[error("cache read failed: {0}")]
    Read(String),
    /// The value could not be persisted.
    #[error("cache write failed: {0}")]
    Write(String),
}

/// Backend trait for the serialized-entry cache.
///
/// Keys are the exact word strings supplied by callers; adapters perform no
/// normalization. Values are the service's serialized entry payloads and are
/// opaque to the adapter. Implementations must be safe for concurrent use.
#[async_trait]
pub trait DictionaryCache: Send + Sync {
    /// Fetch the serialized entry stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a serialized entry under `key`, overwriting any previous value.
    async fn set(&self, key: &str, entry: &str) -> Result<(), CacheError>;
}

#[cfg(test)]
#[path = "ports_test.rs"]
mod tests;
