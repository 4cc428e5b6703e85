//! Extraction of lookup evidence from a sõnaveeb search page.
//!
//! The page contract is narrow: word-class labels sit in spans whose class
//! starts with `word-class`, definitions in `definition-value` spans, usage
//! examples in `usage-text` spans, and morphology cells in `form-value`
//! spans, all in document order. Everything else on the page is ignored, so
//! layout changes outside these spans do not break extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::{Meaning, PartOfSpeech};
use crate::sonaveeb::word_forms::WordMorphology;

static WORD_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span[^>]*class="word-class[^"]*"[^>]*>(.*?)</span>"#)
        .expect("word-class pattern compiles")
});

static SENSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<span[^>]*class="(?:(?P<def>definition-value)|(?P<usage>usage-text))[^"]*"[^>]*>(?P<text>.*?)</span>"#,
    )
    .expect("sense pattern compiles")
});

static FORM_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span[^>]*class="form-value[^"]*"[^>]*>(.*?)</span>"#)
        .expect("form-value pattern compiles")
});

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern compiles"));

/// Evidence extracted from one search page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPage {
    /// Recognized grammatical categories, deduplicated, in page order.
    pub part_of_speech: Vec<PartOfSpeech>,
    /// Senses with the usage examples that follow them.
    pub meanings: Vec<Meaning>,
    /// Morphology cells in page order. Empty cells are kept as empty strings
    /// so later cells stay aligned with their slots.
    pub raw_forms: Vec<String>,
}

impl WordPage {
    /// Pull the evidence spans out of raw page HTML.
    ///
    /// A page with no matching spans parses into an all-empty `WordPage`,
    /// which the provider turns into a "not found" entry.
    pub fn parse(html: &str) -> Self {
        let mut part_of_speech = Vec::new();
        for captures in WORD_CLASS.captures_iter(html) {
            let label = clean_text(&captures[1]);
            if let Some(category) = PartOfSpeech::from_label(&label) {
                if !part_of_speech.contains(&category) {
                    part_of_speech.push(category);
                }
            }
        }

        let mut meanings: Vec<Meaning> = Vec::new();
        for captures in SENSE.captures_iter(html) {
            let text = clean_text(&captures["text"]);
            if text.is_empty() {
                continue;
            }
            if captures.name("def").is_some() {
                meanings.push(Meaning::new(text));
            } else if let Some(current) = meanings.last_mut() {
                // Usage examples belong to the sense they follow; an example
                // with no preceding sense is dropped.
                current.examples.push(text);
            }
        }

        let raw_forms = FORM_VALUE
            .captures_iter(html)
            .map(|captures| clean_text(&captures[1]))
            .collect();

        Self {
            part_of_speech,
            meanings,
            raw_forms,
        }
    }

    /// The evidence the form resolver works from.
    pub fn morphology(&self) -> WordMorphology {
        WordMorphology {
            part_of_speech: self.part_of_speech.clone(),
            raw_forms: self.raw_forms.clone(),
        }
    }
}

/// Strip nested markup, decode the handful of entities the page uses, and
/// collapse whitespace.
fn clean_text(fragment: &str) -> String {
    let stripped = MARKUP.replace_all(fragment, " ");
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&auml;", "ä")
        .replace("&Auml;", "Ä")
        .replace("&ouml;", "ö")
        .replace("&Ouml;", "Ö")
        .replace("&otilde;", "õ")
        .replace("&Otilde;", "Õ")
        .replace("&uuml;", "ü")
        .replace("&Uuml;", "Ü")
        .replace("&scaron;", "š")
        .replace("&zcaron;", "ž")
        .replace("&amp;", "&")
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
