//! Edit distances and the fuzzy ratio used for query correction.

/// Minimum number of single-character insertions, deletions, or
/// substitutions required to turn `s1` into `s2`.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two rolling rows are enough: row i only reads row i - 1.
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0usize; s2_chars.len() + 1];

    for (i, &c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Minimum number of insertions and deletions required to turn `s1`
/// into `s2`, with no substitutions allowed.
///
/// Equal to `len1 + len2 - 2 * lcs`, where `lcs` is the length of the
/// longest common subsequence.
pub fn indel_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    s1_chars.len() + s2_chars.len() - 2 * lcs_length(&s1_chars, &s2_chars)
}

/// Similarity of two strings on a 0 to 100 scale.
///
/// This is the classic token-free fuzzy ratio: the share of characters
/// covered by the longest common subsequence, `100 * 2 * lcs / (len1 +
/// len2)`. A substitution therefore costs two, which makes the ratio
/// forgiving of transposed or swapped letters compared to a plain
/// Levenshtein ratio. Two empty strings are identical and score 100.
pub fn fuzzy_ratio(s1: &str, s2: &str) -> f32 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let total = s1_chars.len() + s2_chars.len();
    if total == 0 {
        return 100.0;
    }

    let matched = 2 * lcs_length(&s1_chars, &s2_chars);
    100.0 * matched as f32 / total as f32
}

/// Length of the longest common subsequence, with two rolling rows.
fn lcs_length(s1_chars: &[char], s2_chars: &[char]) -> usize {
    if s1_chars.is_empty() || s2_chars.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; s2_chars.len() + 1];
    let mut curr = vec![0usize; s2_chars.len() + 1];

    for &c1 in s1_chars {
        for (j, &c2) in s2_chars.iter().enumerate() {
            curr[j + 1] = if c1 == c2 {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr[0] = 0;
    }

    prev[s2_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
        assert_eq!(levenshtein_distance("paella", "paella"), 0);
        assert_eq!(levenshtein_distance("pialla", "paella"), 2);
    }

    #[test]
    fn test_levenshtein_distance_empty_strings() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("rice", ""), 4);
        assert_eq!(levenshtein_distance("", "rice"), 4);
    }

    #[test]
    fn test_indel_distance() {
        // No substitutions: each mismatched letter costs a deletion
        // plus an insertion.
        assert_eq!(indel_distance("paella", "paella"), 0);
        assert_eq!(indel_distance("pialla", "paella"), 2);
        assert_eq!(indel_distance("rice", "ice"), 1);
        assert_eq!(indel_distance("abc", "xyz"), 6);
    }

    #[test]
    fn test_fuzzy_ratio_identical() {
        assert!((fuzzy_ratio("paella", "paella") - 100.0).abs() < f32::EPSILON);
        assert!((fuzzy_ratio("", "") - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fuzzy_ratio_disjoint() {
        assert_eq!(fuzzy_ratio("zzzqqq", "paella"), 0.0);
        assert_eq!(fuzzy_ratio("", "paella"), 0.0);
    }

    #[test]
    fn test_fuzzy_ratio_close_misspelling() {
        // "pialla" and "paella" share the subsequence "palla":
        // 100 * 10 / 12.
        let ratio = fuzzy_ratio("pialla", "paella");
        assert!((ratio - 83.333).abs() < 0.01);
        assert!(ratio >= 80.0);
    }

    #[test]
    fn test_fuzzy_ratio_is_symmetric() {
        let forward = fuzzy_ratio("gazpacho", "gaspacho");
        let backward = fuzzy_ratio("gaspacho", "gazpacho");
        assert_eq!(forward.to_bits(), backward.to_bits());
    }

    #[test]
    fn test_fuzzy_ratio_multibyte() {
        // Char-level, not byte-level: one accent off out of five chars.
        let ratio = fuzzy_ratio("crepe", "crêpe");
        assert!((ratio - 80.0).abs() < 0.01);
    }
}
