//! Lore file loader.
//!
//! Parses a UTF-8 lore file into a read-only [`LoreCorpus`]. A missing or
//! unreadable file yields an empty corpus so every query degrades to the
//! fallback answer instead of failing.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use tharpanya_core::{LoreConfig, LoreFormat, Result, TharPanyaError};

use crate::stopwords::StopWordFilter;

const ENTRY_DELIMITER: &str = "[ENTRY]";
const QUESTION_LABEL: &str = "QUESTION:";
const ANSWER_LABEL: &str = "ANSWER:";

/// One question/answer unit. Keywords are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoreEntry {
    question: String,
    answer: String,
    keywords: BTreeSet<String>,
}

impl LoreEntry {
    /// Build an entry, deriving its keywords from `question`.
    pub fn new(question: impl Into<String>, answer: impl Into<String>, filter: &StopWordFilter) -> Self {
        let question = question.into();
        let keywords = filter.clean(&question);
        Self {
            question,
            answer: answer.into(),
            keywords,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }
}

/// Ordered, immutable collection of lore entries (file order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoreCorpus {
    entries: Vec<LoreEntry>,
}

impl LoreCorpus {
    pub fn from_entries(entries: Vec<LoreEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LoreEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoreEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total keywords across all entries.
    pub fn keyword_count(&self) -> usize {
        self.entries.iter().map(|e| e.keywords.len()).sum()
    }
}

impl<'a> IntoIterator for &'a LoreCorpus {
    type Item = &'a LoreEntry;
    type IntoIter = std::slice::Iter<'a, LoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Loads lore files of a single, explicitly chosen format.
#[derive(Debug, Clone, Default)]
pub struct LoreStore {
    format: LoreFormat,
    filter: StopWordFilter,
}

impl LoreStore {
    pub fn new(format: LoreFormat, filter: StopWordFilter) -> Self {
        Self { format, filter }
    }

    /// Configured format and stop words, matching `AnswerResolver::from_config`.
    pub fn from_config(config: &LoreConfig) -> Self {
        Self::new(config.format, StopWordFilter::from_config(config))
    }

    pub fn format(&self) -> LoreFormat {
        self.format
    }

    /// Load a corpus, failing soft: problems are logged and yield an empty corpus.
    pub fn load(&self, path: &Path) -> LoreCorpus {
        match self.try_load(path) {
            Ok(corpus) => corpus,
            Err(e) => {
                tracing::warn!("⚠️ {e}; all questions will get the fallback answer");
                LoreCorpus::default()
            }
        }
    }

    /// Load a corpus, reporting a missing or unreadable file as an error.
    pub fn try_load(&self, path: &Path) -> Result<LoreCorpus> {
        if !path.exists() {
            return Err(TharPanyaError::LoreNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let corpus = self.parse(&text);
        tracing::info!(
            "📜 Loaded {} lore entries from {} ({})",
            corpus.len(),
            path.display(),
            self.format
        );
        Ok(corpus)
    }

    /// Parse in-memory lore text.
    pub fn parse(&self, text: &str) -> LoreCorpus {
        let entries = match self.format {
            LoreFormat::Segmented => self.parse_segmented(text),
            LoreFormat::Lines => self.parse_lines(text),
        };
        LoreCorpus::from_entries(entries)
    }

    fn parse_segmented(&self, text: &str) -> Vec<LoreEntry> {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for block in text.split(ENTRY_DELIMITER) {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }
            let Some((question_part, answer_part)) = block.split_once(ANSWER_LABEL) else {
                skipped += 1;
                continue;
            };
            let question = question_part.trim();
            let question = question.strip_prefix(QUESTION_LABEL).unwrap_or(question).trim();
            entries.push(LoreEntry::new(question, answer_part.trim(), &self.filter));
        }

        if skipped > 0 {
            tracing::debug!("Skipped {skipped} lore block(s) without {ANSWER_LABEL}");
        }
        entries
    }

    fn parse_lines(&self, text: &str) -> Vec<LoreEntry> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| LoreEntry::new(line, line, &self.filter))
            .collect()
    }
}

/// Load a segmented lore file with the default Thai stop words.
pub fn load_corpus(path: impl AsRef<Path>) -> LoreCorpus {
    LoreStore::default().load(path.as_ref())
}
