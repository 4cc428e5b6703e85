// Dictionary entry model - the canonical result of a word lookup
// Entries are built by a provider from raw source data or reconstructed from
// the cache, and are never mutated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inflection table mapping a slot name (e.g. "ainsuse omastav") to the
/// surface form filling that slot.
pub type WordForms = BTreeMap<String, String>;

/// Grammatical categories recognized by the lookup pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    NumberWord,
    Exclamation,
    Conjunction,
    PrePostPosition,
    Complement,
}

impl PartOfSpeech {
    /// Map an Estonian word-class label, as printed on a dictionary page,
    /// to its tag. Unknown labels yield `None` and are skipped by callers.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "nimisõna" => Some(Self::Noun),
            "tegusõna" => Some(Self::Verb),
            "omadussõna" => Some(Self::Adjective),
            "määrsõna" => Some(Self::Adverb),
            "asesõna" => Some(Self::Pronoun),
            "arvsõna" => Some(Self::NumberWord),
            "hüüdsõna" => Some(Self::Exclamation),
            "sidesõna" => Some(Self::Conjunction),
            "eessõna" | "tagasõna" | "kaassõna" => Some(Self::PrePostPosition),
            "väljend" => Some(Self::Complement),
            _ => None,
        }
    }
}

/// One sense of a word: definition text plus optional usage examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    /// Definition text for this sense.
    pub definition: String,
    /// Usage examples, in source order. May be empty.
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Meaning {
    /// Create a meaning with no examples.
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            examples: Vec::new(),
        }
    }
}

/// The canonical result of a lookup.
///
/// An entry with all of `part_of_speech`, `word_forms`, and `meanings` empty
/// is a well-formed "not found" marker, not an error; see [`Self::exists`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// The headword this entry describes.
    pub word: String,
    /// Detected grammatical categories, in source order.
    #[serde(default)]
    pub part_of_speech: Vec<PartOfSpeech>,
    /// Inflected forms keyed by slot name.
    #[serde(default)]
    pub word_forms: WordForms,
    /// Senses of the word, in source order.
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl DictionaryEntry {
    /// Well-formed "not found" marker: all lookup fields empty.
    pub fn not_found(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            part_of_speech: Vec::new(),
            word_forms: WordForms::new(),
            meanings: Vec::new(),
        }
    }

    /// Whether the lookup actually found something: true iff any of
    /// part of speech, meanings, or word forms is non-empty.
    pub fn exists(&self) -> bool {
        !self.part_of_speech.is_empty()
            || !self.meanings.is_empty()
            || !self.word_forms.is_empty()
    }
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;
