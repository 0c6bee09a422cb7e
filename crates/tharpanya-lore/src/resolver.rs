//! Public question-answering entry point.

use tharpanya_core::LoreConfig;

use crate::matcher::{FuzzyMatcher, ScoredMatch};
use crate::stopwords::StopWordFilter;
use crate::store::LoreCorpus;

/// Returned whenever no lore entry matches.
pub const FALLBACK_ANSWER: &str = "ขออภัย ข้ายังไม่พบข้อมูลที่เกี่ยวข้องในตำนาน KBY";

/// StopWordFilter → FuzzyMatcher → fallback. Stateless between calls.
#[derive(Debug, Clone, Default)]
pub struct AnswerResolver {
    filter: StopWordFilter,
    matcher: FuzzyMatcher,
}

impl AnswerResolver {
    pub fn new(filter: StopWordFilter, matcher: FuzzyMatcher) -> Self {
        Self { filter, matcher }
    }

    /// Built-in Thai stop words plus `extra_stop_words`, configured threshold.
    pub fn from_config(config: &LoreConfig) -> Self {
        Self::new(
            StopWordFilter::from_config(config),
            FuzzyMatcher::with_threshold(config.match_threshold),
        )
    }

    pub fn filter(&self) -> &StopWordFilter {
        &self.filter
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Answer text for `question`, or [`FALLBACK_ANSWER`].
    pub fn answer(&self, question: &str, corpus: &LoreCorpus) -> String {
        self.lookup(question, corpus)
            .map(|m| m.answer().to_string())
            .unwrap_or_else(|| FALLBACK_ANSWER.to_string())
    }

    /// Best match with its score. A question with no keywords never reaches the matcher.
    pub fn lookup<'a>(&self, question: &str, corpus: &'a LoreCorpus) -> Option<ScoredMatch<'a>> {
        let query = self.filter.clean(question);
        if query.is_empty() {
            tracing::debug!("No keywords left in question, using fallback");
            return None;
        }
        let found = self.matcher.best_match(&query, corpus);
        match &found {
            Some(m) => tracing::debug!("🔍 Matched entry #{} (score {})", m.index, m.score),
            None => tracing::debug!("🔍 No lore entry matched {:?}", query),
        }
        found
    }

    /// Up to `k` scored matches, best first.
    pub fn rank<'a>(&self, question: &str, corpus: &'a LoreCorpus, k: usize) -> Vec<ScoredMatch<'a>> {
        let query = self.filter.clean(question);
        if query.is_empty() {
            return Vec::new();
        }
        self.matcher.rank(&query, corpus, k)
    }
}

/// Answer `question` with the default resolver (Thai stop words, threshold 90).
pub fn answer(question: &str, corpus: &LoreCorpus) -> String {
    AnswerResolver::default().answer(question, corpus)
}
