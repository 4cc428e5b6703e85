// Tests for the offline provider.

use super::*;
use crate::ports::ExternalDictionary;

#[tokio::test]
async fn test_seeded_word_resolves_with_full_evidence() {
    let provider = InMemoryDictionary::new();

    let entry = provider.get_word("kass").await.unwrap();

    assert!(entry.exists());
    assert_eq!(entry.word, "kass");
    assert_eq!(entry.part_of_speech, vec![PartOfSpeech::Noun]);
    assert_eq!(entry.word_forms.len(), 6);
    assert_eq!(entry.meanings.len(), 1);
}

#[tokio::test]
async fn test_unknown_word_resolves_to_a_missing_entry() {
    let provider = InMemoryDictionary::new();

    let entry = provider.get_word("zzzzz").await.unwrap();

    assert!(!entry.exists());
    assert_eq!(entry.word, "zzzzz");
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let provider = InMemoryDictionary::new();

    let entry = provider.get_word("Kass").await.unwrap();

    assert!(!entry.exists());
}

#[tokio::test]
async fn test_empty_provider_knows_nothing() {
    let provider = InMemoryDictionary::empty();

    let entry = provider.get_word("kass").await.unwrap();

    assert!(!entry.exists());
}

#[tokio::test]
async fn test_custom_entries_replace_the_seeds() {
    let mut custom = DictionaryEntry::not_found("tere");
    custom.part_of_speech.push(PartOfSpeech::Exclamation);
    let provider = InMemoryDictionary::with_entries([custom.clone()]);

    let found = provider.get_word("tere").await.unwrap();
    let missing = provider.get_word("kass").await.unwrap();

    assert_eq!(found, custom);
    assert!(!missing.exists());
}
