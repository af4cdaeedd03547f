//! Similarity scoring for fuzzy search.
//!
//! Scores are the best normalized Levenshtein similarity between the query
//! and any query-sized window of the target, so a short query still matches
//! well inside a longer field (a partial-ratio, in rapidfuzz terms). An
//! exact substring hit scores 1.0.

use strsim::normalized_levenshtein;

/// Similarity between a query and a target field, in [0, 1]
pub fn similarity(query: &str, target: &str) -> f64 {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if query.is_empty() {
        return 1.0;
    }
    if target.is_empty() {
        return 0.0;
    }
    if target.contains(&query) {
        return 1.0;
    }

    let mut best = normalized_levenshtein(&query, &target);

    let query_len = query.chars().count();
    let target_chars: Vec<char> = target.chars().collect();
    if target_chars.len() > query_len {
        for window in target_chars.windows(query_len) {
            let candidate: String = window.iter().collect();
            let score = normalized_levenshtein(&query, &candidate);
            if score > best {
                best = score;
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_substring_scores_full() {
        assert_eq!(similarity("nmap", "nmap"), 1.0);
        assert_eq!(similarity("map", "/usr/bin/nmap"), 1.0);
        assert_eq!(similarity("NMAP", "nmap network scanner"), 1.0);
    }

    #[test]
    fn test_typo_still_scores_high() {
        // one edit away from "nmap"
        assert!(similarity("nmp", "nmap") >= 0.6);
        assert!(similarity("nmp", "nmap6") >= 0.6);
        // and the closer target scores higher
        assert!(similarity("nmp", "nmap") > similarity("nmp", "nmap6"));
    }

    #[test]
    fn test_unrelated_strings_score_low() {
        assert!(similarity("nmp", "wireshark") < 0.4);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(similarity("", "anything"), 1.0);
        assert_eq!(similarity("query", ""), 0.0);
    }
}
