//! Normalized string similarity (0–100).
//!
//! `ratio = round(100 * (len_a + len_b - indel) / (len_a + len_b))`, where
//! `indel` is the insertion/deletion edit distance. Lengths are counted in
//! chars so Thai text is measured per code point, not per byte.

/// Similarity ratio between two strings, 0 (disjoint) to 100 (identical).
///
/// Two empty strings are identical (100). Halves round up.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    // len_a + len_b - indel == 2 * lcs
    let matched = 2 * lcs_len(&a, &b);
    ((matched * 100 + total / 2) / total) as u8
}

/// Longest common subsequence length, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(ratio("qualia", "qualia"), 100);
        assert_eq!(ratio("", ""), 100);
    }

    #[test]
    fn test_single_char_typo_clears_threshold() {
        // 2 * 5 / 11 = 90.9
        assert_eq!(ratio("qalia", "qualia"), 91);
        assert_eq!(ratio("qualia", "qalia"), 91);
    }

    #[test]
    fn test_disjoint_and_empty() {
        assert_eq!(ratio("abc", "xyz"), 0);
        assert_eq!(ratio("abc", ""), 0);
    }

    #[test]
    fn test_substitution_costs_two() {
        // one substitution = delete + insert: 2 * 3 / 8 = 75
        assert_eq!(ratio("abcd", "abxd"), 75);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // Thai letters are 3 bytes each in UTF-8.
        assert_eq!(ratio("จิตสำนึก", "จิตสำนึก"), 100);
        let r = ratio("ตำนาน", "ตำนาร");
        assert_eq!(r, 80);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(ratio("spiralquest", "spiral"), ratio("spiral", "spiralquest"));
    }
}
