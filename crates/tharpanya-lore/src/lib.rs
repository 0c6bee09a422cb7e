//! # TharPanya Lorekeeper
//!
//! Answers free-text questions from a flat-file lore corpus (the KBY lore).
//! No embeddings, no LLM calls: keyword overlap with fuzzy similarity.
//!
//! ## How it works
//! ```text
//! kby_lore.txt
//!   ↓ LoreStore::load
//! LoreCorpus (entries + keyword sets, file order)
//!
//! User: "Qalia คืออะไร?"
//!   ↓ StopWordFilter::clean
//! {"qalia"}
//!   ↓ FuzzyMatcher::best_match (ratio > 90 accumulates)
//! "...คือมิติของประสบการณ์รับรู้ที่ใช้ในการสื่อสารกับ SOA"
//!   or FALLBACK_ANSWER
//! ```

pub mod matcher;
pub mod ratio;
pub mod resolver;
pub mod stopwords;
pub mod store;

pub use matcher::{FuzzyMatcher, MATCH_THRESHOLD, ScoredMatch};
pub use ratio::ratio;
pub use resolver::{AnswerResolver, FALLBACK_ANSWER, answer};
pub use stopwords::StopWordFilter;
pub use store::{LoreCorpus, LoreEntry, LoreStore, load_corpus};
pub use tharpanya_core::LoreFormat;
