// Backend assembly - picks the live scraper or the offline dictionary

use std::sync::Arc;

use crate::inmemory::InMemoryDictionary;
use crate::ports::ExternalDictionary;
use crate::sonaveeb::SonaveebDictionary;

/// Which provider the service talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendChoice {
    /// Live lookups against www.sonaveeb.ee.
    Sonaveeb,
    /// Fixed offline entries.
    #[default]
    InMemory,
}

impl BackendChoice {
    /// Selection from a configuration value: exactly `"sonaveeb"` picks the
    /// live backend, anything else (including no value) the offline one.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("sonaveeb") => Self::Sonaveeb,
            _ => Self::InMemory,
        }
    }
}

/// Errors from assembling a backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("could not set up the sonaveeb backend: {0}")]
    Setup(String),
}

/// Build the provider for the given choice.
///
/// The live provider gets the standard strategy chain; assembly itself does
/// no network I/O.
pub fn assemble(choice: BackendChoice) -> Result<Arc<dyn ExternalDictionary>, BackendError> {
    match choice {
        BackendChoice::Sonaveeb => {
            let provider =
                SonaveebDictionary::new().map_err(|err| BackendError::Setup(err.to_string()))?;
            crate::info!("dictionary backend: sonaveeb");
            Ok(Arc::new(provider))
        }
        BackendChoice::InMemory => {
            crate::info!("dictionary backend: in-memory");
            Ok(Arc::new(InMemoryDictionary::new()))
        }
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
