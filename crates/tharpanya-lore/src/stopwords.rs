//! Stop-word filtering and tokenization.
//!
//! Thai has no spaces between words, so a whitespace token such as
//! `คืออะไร` is really `คือ` + `อะไร`. A token built entirely from stop
//! words is treated as a stop word itself.

use std::collections::{BTreeSet, HashSet};

use tharpanya_core::LoreConfig;

/// High-frequency Thai function words that carry no lore signal.
pub const THAI_STOP_WORDS: &[&str] = &[
    "คือ", "อะไร", "ทำไม", "ที่ไหน", "อย่างไร", "มี", "เป็น", "และ", "ใน", "ของ", "ให้", "การ",
    "ได้", "ไป", "มา", "อยู่", "อย่าง",
];

/// Marks trimmed from token edges in addition to ASCII punctuation.
const EXTRA_PUNCTUATION: &[char] = &['ฯ', 'ๆ', '“', '”', '‘', '’', '…', '«', '»'];

/// Set-based stop-word filter.
#[derive(Debug, Clone)]
pub struct StopWordFilter {
    words: HashSet<String>,
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::thai()
    }
}

impl StopWordFilter {
    /// The built-in Thai stop-word set.
    pub fn thai() -> Self {
        Self::with_words(THAI_STOP_WORDS.iter().copied())
    }

    /// Built-in Thai set plus the configured `extra_stop_words`.
    ///
    /// Corpus keywords and query keywords must come from the same filter.
    pub fn from_config(config: &LoreConfig) -> Self {
        let mut filter = Self::thai();
        filter.extend(&config.extra_stop_words);
        filter
    }

    /// Build a filter from an arbitrary word list.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self { words: HashSet::new() };
        filter.extend(words);
        filter
    }

    /// Add more stop words (lowercased, blanks ignored).
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Tokenize `text` into its lowercase keyword set, stop words removed.
    ///
    /// An empty result means the text carries no signal.
    pub fn clean(&self, text: &str) -> BTreeSet<String> {
        text.split_whitespace()
            .map(|raw| raw.to_lowercase())
            .map(|token| trim_punctuation(&token).to_string())
            .filter(|token| !token.is_empty() && !self.is_stop_word(token))
            .collect()
    }

    /// True if `token` is a stop word or a run of concatenated stop words.
    pub fn is_stop_word(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        if token.is_empty() {
            return false;
        }
        if self.words.contains(&token) {
            return true;
        }
        self.is_compound(&token)
    }

    /// Can `token` be segmented completely into stop words?
    fn is_compound(&self, token: &str) -> bool {
        // Char-boundary byte offsets, including the end of the string.
        let bounds: Vec<usize> = token
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(token.len()))
            .collect();

        // reachable[i]: token[..bounds[i]] splits cleanly into stop words.
        let mut reachable = vec![false; bounds.len()];
        reachable[0] = true;
        for end in 1..bounds.len() {
            reachable[end] = (0..end)
                .any(|start| reachable[start] && self.words.contains(&token[bounds[start]..bounds[end]]));
        }
        reachable[bounds.len() - 1]
    }
}

fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c))
}
