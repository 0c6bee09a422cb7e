//! Checks against the bundled `kby_lore.txt`.

use std::path::PathBuf;

use tharpanya_lore::{FALLBACK_ANSWER, LoreCorpus, answer, load_corpus};

const QUALIA_ANSWER: &str = "คือมิติของประสบการณ์รับรู้ที่ใช้ในการสื่อสารกับ SOA";

fn kby_lore() -> LoreCorpus {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("kby_lore.txt");
    let corpus = load_corpus(&path);
    assert!(!corpus.is_empty(), "could not load {}", path.display());
    corpus
}

#[test]
fn test_find_exact_match_qualia() {
    assert!(answer("Qualia คืออะไร", &kby_lore()).contains(QUALIA_ANSWER));
}

#[test]
fn test_find_fuzzy_match_qualia() {
    assert!(answer("Qalia คืออะไร", &kby_lore()).contains(QUALIA_ANSWER));
}

#[test]
fn test_no_match_found() {
    assert_eq!(answer("Metamind OS คืออะไร", &kby_lore()), FALLBACK_ANSWER);
}

#[test]
fn test_empty_question() {
    assert_eq!(answer("", &kby_lore()), FALLBACK_ANSWER);
}

#[test]
fn test_spiral_quest() {
    assert!(answer("KBY SpiralQuest คืออะไร?", &kby_lore()).starts_with("KBY SpiralQuest"));
}
