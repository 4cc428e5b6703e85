//! Cache adapters for serialized dictionary entries.
//!
//! Two implementations of [`DictionaryCache`](crate::ports::DictionaryCache)
//! live here: [`MemoryCache`] keeps entries for the lifetime of the process,
//! [`FileCache`] persists them to a single JSON file so lookups survive
//! restarts.

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;
