//! Live dictionary provider scraping sõnaveeb search pages.
//!
//! [`client::SonaveebClient`] pulls the search page, [`page::WordPage`]
//! extracts the evidence spans from it, and the
//! [`word_forms::WordFormResolver`] turns the raw morphology into the entry's
//! forms table.

pub mod client;
pub mod page;
pub mod word_forms;

use async_trait::async_trait;

use crate::entry::DictionaryEntry;
use crate::ports::{ExternalDictionary, ProviderError};

use self::client::{ClientError, SonaveebClient};
use self::page::WordPage;
use self::word_forms::WordFormResolver;

/// Provider that answers lookups from the public search pages.
pub struct SonaveebDictionary {
    client: SonaveebClient,
    resolver: WordFormResolver,
}

impl SonaveebDictionary {
    /// Provider against the public host with the standard strategy chain.
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self::with_parts(
            SonaveebClient::new()?,
            WordFormResolver::standard(),
        ))
    }

    /// Provider from explicit parts, for mirrors and tests.
    pub fn with_parts(client: SonaveebClient, resolver: WordFormResolver) -> Self {
        Self { client, resolver }
    }

    /// Assemble the entry for `word` from an extracted page. A page with no
    /// evidence assembles into a "not found" entry.
    fn entry_from_page(&self, word: &str, page: WordPage) -> DictionaryEntry {
        let word_forms = self.resolver.resolve(word, &page.morphology());
        DictionaryEntry {
            word: word.to_string(),
            part_of_speech: page.part_of_speech,
            word_forms,
            meanings: page.meanings,
        }
    }
}

fn provider_error(err: ClientError) -> ProviderError {
    match err {
        ClientError::Body(cause) => ProviderError::Parse(cause),
        other => ProviderError::Request(other.to_string()),
    }
}

#[async_trait]
impl ExternalDictionary for SonaveebDictionary {
    async fn get_word(&self, word: &str) -> Result<DictionaryEntry, ProviderError> {
        let html = self
            .client
            .fetch_search_page(word)
            .await
            .map_err(provider_error)?;

        let page = WordPage::parse(&html);
        let entry = self.entry_from_page(word, page);

        crate::debug!(
            "sõnaveeb entry for '{word}': {} classes, {} meanings, {} forms",
            entry.part_of_speech.len(),
            entry.meanings.len(),
            entry.word_forms.len()
        );
        Ok(entry)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
