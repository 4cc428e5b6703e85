//! Word-form derivation from scraped morphology.
//!
//! Sõnaveeb reports inflected forms as a flat sequence whose meaning depends
//! on the word's grammatical category. A [`WordFormResolver`] walks an
//! ordered chain of [`WordFormStrategy`] implementations; the first strategy
//! that accepts the evidence derives the whole forms table. Tables are never
//! merged across strategies, so the chain order is the precedence order for
//! words with evidence in several categories.

mod strategies;

pub use strategies::{standard_strategies, CategoryStrategy, FallbackStrategy};

use crate::entry::{PartOfSpeech, WordForms};

/// Morphological evidence scraped for one word: the grammatical categories
/// the source reports and the inflected forms in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMorphology {
    pub part_of_speech: Vec<PartOfSpeech>,
    pub raw_forms: Vec<String>,
}

/// One link in the derivation chain.
pub trait WordFormStrategy: Send + Sync {
    /// Whether this strategy claims the word.
    fn accepts(&self, morphology: &WordMorphology) -> bool;

    /// Build the forms table for `word`. Only called after
    /// [`accepts`](Self::accepts) returned true; the result is final, never
    /// merged with another strategy's output.
    fn derive_forms(&self, word: &str, morphology: &WordMorphology) -> WordForms;
}

/// Ordered first-match dispatch over a strategy chain.
pub struct WordFormResolver {
    strategies: Vec<Box<dyn WordFormStrategy>>,
}

impl WordFormResolver {
    /// Build a resolver from an ordered chain. Callers put a strategy that
    /// accepts everything at the end to make resolution total.
    pub fn new(strategies: Vec<Box<dyn WordFormStrategy>>) -> Self {
        Self { strategies }
    }

    /// Resolver with the standard category chain.
    pub fn standard() -> Self {
        Self::new(standard_strategies())
    }

    /// Derive the forms table for `word` from the given evidence. The first
    /// accepting strategy decides; an empty chain derives an empty table.
    pub fn resolve(&self, word: &str, morphology: &WordMorphology) -> WordForms {
        for strategy in &self.strategies {
            if strategy.accepts(morphology) {
                return strategy.derive_forms(word, morphology);
            }
        }
        WordForms::new()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
