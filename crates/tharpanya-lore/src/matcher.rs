//! Fuzzy keyword matcher.
//!
//! Each query keyword is compared against every keyword of an entry; the
//! best ratio counts toward the entry's score only when it clears the
//! threshold. Scores are summed, not averaged, so entries overlapping the
//! query on more keywords rank higher.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::ratio::ratio;
use crate::store::{LoreCorpus, LoreEntry};

/// A keyword's best ratio must be strictly above this to score.
pub const MATCH_THRESHOLD: u8 = 90;

/// An entry together with its accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMatch<'a> {
    /// Position in the corpus (file order).
    pub index: usize,
    pub score: u32,
    pub entry: &'a LoreEntry,
}

impl ScoredMatch<'_> {
    pub fn answer(&self) -> &str {
        self.entry.answer()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatcher {
    threshold: u8,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::with_threshold(MATCH_THRESHOLD)
    }

    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Sum of above-threshold best ratios of `query` keywords against `entry`.
    pub fn score(&self, query: &BTreeSet<String>, entry: &LoreEntry) -> u32 {
        let keywords = entry.keywords();
        if keywords.is_empty() {
            return 0;
        }
        query
            .iter()
            .filter_map(|q| keywords.iter().map(|e| ratio(q, e)).max())
            .filter(|&best| best > self.threshold)
            .map(u32::from)
            .sum()
    }

    /// Highest-scoring entry; the earliest one wins ties. `None` if nothing scored.
    pub fn best_match<'a>(
        &self,
        query: &BTreeSet<String>,
        corpus: &'a LoreCorpus,
    ) -> Option<ScoredMatch<'a>> {
        let mut best: Option<ScoredMatch<'a>> = None;
        let mut highest = 0u32;

        for (index, entry) in corpus.iter().enumerate() {
            let score = self.score(query, entry);
            if score > highest {
                highest = score;
                best = Some(ScoredMatch { index, score, entry });
            }
        }
        best
    }

    /// Up to `k` scoring entries, best first, ties in file order.
    pub fn rank<'a>(
        &self,
        query: &BTreeSet<String>,
        corpus: &'a LoreCorpus,
        k: usize,
    ) -> Vec<ScoredMatch<'a>> {
        let mut matches: Vec<ScoredMatch<'a>> = corpus
            .iter()
            .enumerate()
            .map(|(index, entry)| ScoredMatch {
                index,
                score: self.score(query, entry),
                entry,
            })
            .filter(|m| m.score > 0)
            .collect();
        // Stable sort keeps file order among equal scores.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(k);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::StopWordFilter;

    fn keywords(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn corpus(pairs: &[(&str, &str)]) -> LoreCorpus {
        let filter = StopWordFilter::thai();
        LoreCorpus::from_entries(
            pairs
                .iter()
                .map(|(q, a)| LoreEntry::new(*q, *a, &filter))
                .collect(),
        )
    }

    #[test]
    fn test_exact_keyword_scores_100() {
        let c = corpus(&[("Qualia คืออะไร", "perception")]);
        let m = FuzzyMatcher::new();
        assert_eq!(m.score(&keywords(&["qualia"]), &c.entries()[0]), 100);
    }

    #[test]
    fn test_typo_scores_ratio() {
        let c = corpus(&[("Qualia คืออะไร", "perception")]);
        let m = FuzzyMatcher::new();
        assert_eq!(m.score(&keywords(&["qalia"]), &c.entries()[0]), 91);
    }

    #[test]
    fn test_at_threshold_contributes_nothing() {
        // ratio("abcdefghij", "abcdefghi") = 2*9/19 = 94.7 -> 95
        let c = corpus(&[("abcdefghij", "x")]);
        let q = keywords(&["abcdefghi"]);
        assert_eq!(FuzzyMatcher::with_threshold(94).score(&q, &c.entries()[0]), 95);
        assert_eq!(FuzzyMatcher::with_threshold(95).score(&q, &c.entries()[0]), 0);
    }

    #[test]
    fn test_entry_without_keywords_scores_zero() {
        let c = corpus(&[("คือ อะไร", "only stop words")]);
        assert!(c.entries()[0].keywords().is_empty());
        assert_eq!(FuzzyMatcher::new().score(&keywords(&["qualia"]), &c.entries()[0]), 0);
    }

    #[test]
    fn test_scores_accumulate_across_keywords() {
        let c = corpus(&[("Qualia", "one"), ("Qualia SOA", "two")]);
        let m = FuzzyMatcher::new();
        let best = m.best_match(&keywords(&["qualia", "soa"]), &c).unwrap();
        assert_eq!(best.index, 1);
        assert_eq!(best.score, 200);
    }

    #[test]
    fn test_many_keywords_bias() {
        // Additive scoring: a broad entry outranks a focused one when it
        // overlaps on more query terms.
        let c = corpus(&[
            ("SpiralQuest", "focused"),
            ("KBY SpiralQuest Qualia SOA", "broad"),
        ]);
        let best = FuzzyMatcher::new()
            .best_match(&keywords(&["kby", "spiralquest", "soa"]), &c)
            .unwrap();
        assert_eq!(best.answer(), "broad");
        assert_eq!(best.score, 300);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let c = corpus(&[("Qualia first", "first"), ("Qualia second", "second")]);
        let best = FuzzyMatcher::new()
            .best_match(&keywords(&["qualia"]), &c)
            .unwrap();
        assert_eq!(best.answer(), "first");
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_no_match() {
        let c = corpus(&[("Qualia", "one")]);
        assert!(FuzzyMatcher::new()
            .best_match(&keywords(&["metamind", "os"]), &c)
            .is_none());
        assert!(FuzzyMatcher::new()
            .best_match(&keywords(&["qualia"]), &LoreCorpus::default())
            .is_none());
    }

    #[test]
    fn test_rank_orders_and_truncates() {
        let c = corpus(&[
            ("Qualia", "a"),
            ("Unrelated", "b"),
            ("Qualia SOA", "c"),
            ("SOA", "d"),
        ]);
        let m = FuzzyMatcher::new();
        let ranked = m.rank(&keywords(&["qualia", "soa"]), &c, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].answer(), "c");
        // "a" and "d" tie at 100; file order decides.
        assert_eq!(ranked[1].answer(), "a");

        let all = m.rank(&keywords(&["qualia", "soa"]), &c, 10);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|r| r.answer() != "b"));
    }

    #[test]
    fn test_rank_agrees_with_best_match() {
        let c = corpus(&[("Qualia", "a"), ("Qualia SOA", "b"), ("SOA", "c")]);
        let m = FuzzyMatcher::new();
        let q = keywords(&["soa"]);
        assert_eq!(m.rank(&q, &c, 1)[0], m.best_match(&q, &c).unwrap());
    }

    #[test]
    fn test_ranked_matches_serialize() {
        let c = corpus(&[("Unrelated", "b"), ("Qualia SOA", "perception")]);
        let ranked = FuzzyMatcher::new().rank(&keywords(&["qualia"]), &c, 3);
        let json = serde_json::to_value(&ranked).unwrap();

        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["index"], 1);
        assert_eq!(rows[0]["score"], 100);
        assert_eq!(rows[0]["entry"]["question"], "Qualia SOA");
        assert_eq!(rows[0]["entry"]["answer"], "perception");
        assert_eq!(rows[0]["entry"]["keywords"], serde_json::json!(["qualia", "soa"]));
    }
}
