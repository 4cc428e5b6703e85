// Tests for the dictionary entry model
// Test cases:
// - exists() is true when any single field is populated, false when all are empty
// - Serialization round-trips an entry with every field populated
// - Wire format uses camelCase keys
// - Deserializing an entry with missing fields falls back to empty defaults
// - Estonian word-class labels map to tags; unknown labels are rejected

use super::*;

fn full_entry() -> DictionaryEntry {
    let mut forms = WordForms::new();
    forms.insert("ainsuse nimetav".to_string(), "kass".to_string());
    forms.insert("ainsuse omastav".to_string(), "kassi".to_string());

    DictionaryEntry {
        word: "kass".to_string(),
        part_of_speech: vec![PartOfSpeech::Noun],
        word_forms: forms,
        meanings: vec![Meaning {
            definition: "a small domesticated feline".to_string(),
            examples: vec!["Kass magab.".to_string()],
        }],
    }
}

#[test]
fn test_exists_with_each_field_alone() {
    let mut entry = DictionaryEntry::not_found("kass");
    assert!(!entry.exists());

    entry.part_of_speech.push(PartOfSpeech::Noun);
    assert!(entry.exists());

    let mut entry = DictionaryEntry::not_found("kass");
    entry.meanings.push(Meaning::new("a small domesticated feline"));
    assert!(entry.exists());

    let mut entry = DictionaryEntry::not_found("kass");
    entry
        .word_forms
        .insert("ainsuse nimetav".to_string(), "kass".to_string());
    assert!(entry.exists());
}

#[test]
fn test_not_found_marker_is_empty() {
    let entry = DictionaryEntry::not_found("zzzzz");
    assert_eq!(entry.word, "zzzzz");
    assert!(entry.part_of_speech.is_empty());
    assert!(entry.word_forms.is_empty());
    assert!(entry.meanings.is_empty());
}

#[test]
fn test_serialization_round_trip() {
    let entry = full_entry();
    let serialized = serde_json::to_string(&entry).unwrap();
    let restored: DictionaryEntry = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, entry);
}

#[test]
fn test_round_trip_of_not_found_marker() {
    let entry = DictionaryEntry::not_found("zzzzz");
    let serialized = serde_json::to_string(&entry).unwrap();
    let restored: DictionaryEntry = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, entry);
    assert!(!restored.exists());
}

#[test]
fn test_wire_format_uses_camel_case() {
    let serialized = serde_json::to_string(&full_entry()).unwrap();
    assert!(serialized.contains("\"partOfSpeech\""));
    assert!(serialized.contains("\"wordForms\""));
    assert!(serialized.contains("\"noun\""));
}

#[test]
fn test_missing_fields_deserialize_to_defaults() {
    // A minimal cached payload from an older writer
    let json = r#"{"word":"kass"}"#;
    let entry: DictionaryEntry = serde_json::from_str(json).unwrap();

    assert_eq!(entry.word, "kass");
    assert!(entry.part_of_speech.is_empty());
    assert!(entry.word_forms.is_empty());
    assert!(entry.meanings.is_empty());
    assert!(!entry.exists());
}

#[test]
fn test_word_class_labels_map_to_tags() {
    assert_eq!(PartOfSpeech::from_label("nimisõna"), Some(PartOfSpeech::Noun));
    assert_eq!(PartOfSpeech::from_label("tegusõna"), Some(PartOfSpeech::Verb));
    assert_eq!(
        PartOfSpeech::from_label("omadussõna"),
        Some(PartOfSpeech::Adjective)
    );
    assert_eq!(
        PartOfSpeech::from_label("määrsõna"),
        Some(PartOfSpeech::Adverb)
    );
    assert_eq!(PartOfSpeech::from_label("asesõna"), Some(PartOfSpeech::Pronoun));
    assert_eq!(
        PartOfSpeech::from_label("arvsõna"),
        Some(PartOfSpeech::NumberWord)
    );
    assert_eq!(
        PartOfSpeech::from_label("hüüdsõna"),
        Some(PartOfSpeech::Exclamation)
    );
    assert_eq!(
        PartOfSpeech::from_label("sidesõna"),
        Some(PartOfSpeech::Conjunction)
    );
    assert_eq!(
        PartOfSpeech::from_label("kaassõna"),
        Some(PartOfSpeech::PrePostPosition)
    );
    assert_eq!(
        PartOfSpeech::from_label("eessõna"),
        Some(PartOfSpeech::PrePostPosition)
    );
    assert_eq!(
        PartOfSpeech::from_label("väljend"),
        Some(PartOfSpeech::Complement)
    );
}

#[test]
fn test_word_class_label_trims_and_ignores_case() {
    assert_eq!(
        PartOfSpeech::from_label("  Nimisõna "),
        Some(PartOfSpeech::Noun)
    );
}

#[test]
fn test_unknown_word_class_label_is_rejected() {
    assert_eq!(PartOfSpeech::from_label("verb"), None);
    assert_eq!(PartOfSpeech::from_label(""), None);
}
