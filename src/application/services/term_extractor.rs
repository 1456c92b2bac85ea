use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Term;

pub const MIN_TERM_CHARS: usize = 5;

// Only words of MIN_TERM_CHARS or more need listing; shorter ones never qualify.
const STOP_WORDS: [&str; 32] = [
    "about", "above", "after", "again", "against", "along", "among", "because", "before",
    "being", "below", "between", "could", "document", "during", "every", "first", "might",
    "other", "shall", "should", "since", "still", "their", "there", "these", "those", "through",
    "under", "where", "which", "would",
];

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

pub fn is_stop_word(normalized: &str) -> bool {
    STOP_WORDS.contains(&normalized)
}

/// Ranks terms by raw occurrence count.
///
/// No stemming and no weighting: the only signal is how often a token repeats.
/// Ties keep first-occurrence order. `text` keeps the surface form of the first
/// occurrence while counting happens on the lowercase form.
pub fn extract_frequent_terms(text: &str, limit: usize) -> Vec<Term> {
    if limit == 0 {
        return Vec::new();
    }

    let mut terms: Vec<Term> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in NON_WORD.split(text) {
        if token.chars().count() < MIN_TERM_CHARS {
            continue;
        }

        let normalized = token.to_lowercase();
        if is_stop_word(&normalized) {
            continue;
        }

        match positions.get(&normalized) {
            Some(&index) => terms[index].frequency += 1,
            None => {
                positions.insert(normalized.clone(), terms.len());
                terms.push(Term::new(token, 1, normalized));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-occurrence order
    terms.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    terms.truncate(limit);
    terms
}
