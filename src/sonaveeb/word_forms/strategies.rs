// Standard derivation chain - one strategy per grammatical category, catch-all last
// Declinable categories zip a slot template over the raw form sequence;
// uninflected categories claim the word with an empty table so a later
// strategy cannot re-derive it

use crate::entry::{PartOfSpeech, WordForms};

use super::{WordFormStrategy, WordMorphology};

/// Case slots reported for nouns, adjectives, and pronouns: the three
/// grammatical cases, singular then plural.
const NOMINAL_SLOTS: &[&str] = &[
    "ainsuse nimetav",
    "ainsuse omastav",
    "ainsuse osastav",
    "mitmuse nimetav",
    "mitmuse omastav",
    "mitmuse osastav",
];

/// Principal verb forms in source order.
const VERB_SLOTS: &[&str] = &[
    "ma-tegevusnimi",
    "da-tegevusnimi",
    "ainsuse 3. pööre",
    "umbisikuline olevik",
];

/// Number words decline like nominals but the source lists singular only.
const NUMBER_SLOTS: &[&str] = &["ainsuse nimetav", "ainsuse omastav", "ainsuse osastav"];

/// Comparison degrees for adverbs.
const COMPARISON_SLOTS: &[&str] = &["algvõrre", "keskvõrre", "ülivõrre"];

/// Uninflected categories derive nothing.
const NO_SLOTS: &[&str] = &[];

/// Claims words whose evidence lists a specific category and fills that
/// category's slot template from the raw forms, positionally.
///
/// The zip stops at whichever side runs out: a short scrape fills only the
/// leading slots, surplus raw forms are dropped. Empty raw values consume
/// their slot without producing a row.
pub struct CategoryStrategy {
    category: PartOfSpeech,
    slots: &'static [&'static str],
}

impl CategoryStrategy {
    pub const fn new(category: PartOfSpeech, slots: &'static [&'static str]) -> Self {
        Self { category, slots }
    }
}

impl WordFormStrategy for CategoryStrategy {
    fn accepts(&self, morphology: &WordMorphology) -> bool {
        morphology.part_of_speech.contains(&self.category)
    }

    fn derive_forms(&self, _word: &str, morphology: &WordMorphology) -> WordForms {
        let mut forms = WordForms::new();
        for (slot, value) in self.slots.iter().zip(&morphology.raw_forms) {
            if !value.is_empty() {
                forms.insert((*slot).to_string(), value.clone());
            }
        }
        forms
    }
}

/// Accepts every word; derives an empty table. Placed last so resolution is
/// total even when no category matched.
pub struct FallbackStrategy;

impl WordFormStrategy for FallbackStrategy {
    fn accepts(&self, _morphology: &WordMorphology) -> bool {
        true
    }

    fn derive_forms(&self, _word: &str, _morphology: &WordMorphology) -> WordForms {
        WordForms::new()
    }
}

/// The standard chain: one strategy per category, most common categories
/// first, the catch-all last. The order is the precedence order.
pub fn standard_strategies() -> Vec<Box<dyn WordFormStrategy>> {
    vec![
        Box::new(CategoryStrategy::new(PartOfSpeech::Noun, NOMINAL_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::Verb, VERB_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::Adjective, NOMINAL_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::Adverb, COMPARISON_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::Pronoun, NOMINAL_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::NumberWord, NUMBER_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::Exclamation, NO_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::Conjunction, NO_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::PrePostPosition, NO_SLOTS)),
        Box::new(CategoryStrategy::new(PartOfSpeech::Complement, NO_SLOTS)),
        Box::new(FallbackStrategy),
    ]
}

#[cfg(test)]
#[path = "strategies_test.rs"]
mod tests;
