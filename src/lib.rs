//! Estonian dictionary lookups with pluggable backends and a cache-aside
//! store.
//!
//! [`DictionaryService`] resolves a word into part-of-speech tags, inflected
//! forms, and meanings. Lookups go through a [`DictionaryCache`] first and
//! fall back to an [`ExternalDictionary`] provider; the shipped providers are
//! the live sõnaveeb scraper and a fixed offline set, selected through
//! [`BackendChoice`].

pub mod backend;
pub mod cache;
pub mod entry;
pub mod inmemory;
pub mod ports;
pub mod service;
pub mod sonaveeb;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, warn};

pub use backend::{assemble, BackendChoice, BackendError};
pub use cache::{FileCache, MemoryCache};
pub use entry::{DictionaryEntry, Meaning, PartOfSpeech, WordForms};
pub use ports::{CacheError, DictionaryCache, ExternalDictionary, ProviderError};
pub use service::{DictionaryService, ServiceError, WordResult};
