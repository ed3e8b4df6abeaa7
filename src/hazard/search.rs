//! Fuzzy name search
//!
//! Ranks named records against a free-text query. Exact-prefix and
//! substring matches are boosted above the similarity score so that a
//! typo'd query still surfaces the obvious candidate first.

use crate::constants::search::FUZZY_MIN_SCORE;
use std::collections::HashSet;

/// Score a candidate name against a query, in [0, 1]
///
/// Prefix matches score at least 0.95, substring matches at least 0.85,
/// everything else falls back to bigram similarity.
pub fn score_name(candidate: &str, query: &str) -> f64 {
    let candidate_lower = candidate.to_lowercase();
    let query_lower = query.to_lowercase();
    if candidate_lower.is_empty() {
        return 0.0;
    }

    let mut ratio = bigram_similarity(&candidate_lower, &query_lower);
    if candidate_lower.starts_with(&query_lower) {
        ratio = ratio.max(0.95);
    } else if candidate_lower.contains(&query_lower) {
        ratio = ratio.max(0.85);
    }
    ratio
}

/// Rank items by name similarity to a query
///
/// Candidates scoring at least the significance cutoff win; when nothing
/// clears the cutoff the full pool is ranked instead, so a rough query
/// still returns its best guesses. Ties break by name.
pub fn rank_by_name<'a, T, F>(items: &'a [T], name_of: F, query: &str, limit: usize) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    if items.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &T)> = items
        .iter()
        .map(|item| (score_name(name_of(item), query), item))
        .collect();

    let any_significant = scored.iter().any(|(score, _)| *score >= FUZZY_MIN_SCORE);
    if any_significant {
        scored.retain(|(score, _)| *score >= FUZZY_MIN_SCORE);
    }

    scored.sort_by(|(sa, a), (sb, b)| {
        sb.partial_cmp(sa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| name_of(a).cmp(name_of(b)))
    });

    scored.into_iter().take(limit).map(|(_, item)| item).collect()
}

/// Dice coefficient over character bigrams
fn bigram_similarity(a: &str, b: &str) -> f64 {
    let a_grams = bigrams(a);
    let b_grams = bigrams(b);
    if a_grams.is_empty() || b_grams.is_empty() {
        return if a == b { 1.0 } else { 0.0 };
    }

    let shared = a_grams.intersection(&b_grams).count();
    (2.0 * shared as f64) / (a_grams.len() + b_grams.len()) as f64
}

fn bigrams(s: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}
