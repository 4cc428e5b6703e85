// In-memory dictionary - serves a small fixed set of entries and never fails
// Default backend for development; words outside the set resolve to
// "not found" entries, same as a live miss

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entry::{DictionaryEntry, Meaning, PartOfSpeech};
use crate::ports::{ExternalDictionary, ProviderError};

/// Provider backed by a fixed entry map keyed by exact word.
pub struct InMemoryDictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl InMemoryDictionary {
    /// Provider seeded with a handful of common words.
    pub fn new() -> Self {
        Self::with_entries([seed_kass(), seed_lugema(), seed_ja()])
    }

    /// Provider that knows no words at all.
    pub fn empty() -> Self {
        Self::with_entries([])
    }

    /// Provider over the given entries, keyed by their words.
    pub fn with_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.word.clone(), entry))
            .collect();
        Self { entries }
    }
}

impl Default for InMemoryDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExternalDictionary for InMemoryDictionary {
    async fn get_word(&self, word: &str) -> Result<DictionaryEntry, ProviderError> {
        Ok(self
            .entries
            .get(word)
            .cloned()
            .unwrap_or_else(|| DictionaryEntry::not_found(word)))
    }
}

fn seed_kass() -> DictionaryEntry {
    let mut entry = DictionaryEntry::not_found("kass");
    entry.part_of_speech.push(PartOfSpeech::Noun);
    for (slot, form) in [
        ("ainsuse nimetav", "kass"),
        ("ainsuse omastav", "kassi"),
        ("ainsuse osastav", "kassi"),
        ("mitmuse nimetav", "kassid"),
        ("mitmuse omastav", "kasside"),
        ("mitmuse osastav", "kasse"),
    ] {
        entry.word_forms.insert(slot.to_string(), form.to_string());
    }
    let mut meaning = Meaning::new("kodustatud kaslane");
    meaning.examples.push("Kass näugus akna taga.".to_string());
    entry.meanings.push(meaning);
    entry
}

fn seed_lugema() -> DictionaryEntry {
    let mut entry = DictionaryEntry::not_found("lugema");
    entry.part_of_speech.push(PartOfSpeech::Verb);
    for (slot, form) in [
        ("ma-tegevusnimi", "lugema"),
        ("da-tegevusnimi", "lugeda"),
        ("ainsuse 3. pööre", "loeb"),
        ("umbisikuline olevik", "loetakse"),
    ] {
        entry.word_forms.insert(slot.to_string(), form.to_string());
    }
    entry
        .meanings
        .push(Meaning::new("kirjutatut jälgima ja mõistma"));
    entry
}

fn seed_ja() -> DictionaryEntry {
    let mut entry = DictionaryEntry::not_found("ja");
    entry.part_of_speech.push(PartOfSpeech::Conjunction);
    entry.meanings.push(Meaning::new("seob lauseosi"));
    entry
}

#[cfg(test)]
#[path = "inmemory_test.rs"]
mod tests;
