//! Text feature extraction: tokenizing, stop-word cleaning, and overlap measures.

use std::collections::HashSet;

use crate::lexicon;

/// Overlap measures between request text and code text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSimilarity {
    /// |A ∩ B| / |A ∪ B| over cleaned token sets.
    pub jaccard: f64,
    /// Distinct request bigrams that also occur in the code text.
    pub phrase_matches: usize,
    /// Share of cleaned request tokens present in the code text.
    pub word_overlap: f64,
}

/// Lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Tokens with stop words and single characters removed.
pub fn clean_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() >= 2 && !lexicon::is_stop_word(t))
        .collect()
}

/// Exact Jaccard similarity. Returns 0.0 if both sets are empty.
pub fn jaccard<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Adjacent token pairs joined by a space.
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

/// Compare request text against code text.
pub fn compare(request_text: &str, code_text: &str) -> TextSimilarity {
    let request_tokens = clean_tokens(request_text);
    let code_tokens = clean_tokens(code_text);
    if request_tokens.is_empty() || code_tokens.is_empty() {
        return TextSimilarity::default();
    }

    let request_set: HashSet<&str> = request_tokens.iter().map(String::as_str).collect();
    let code_set: HashSet<&str> = code_tokens.iter().map(String::as_str).collect();

    let code_bigrams: HashSet<String> = bigrams(&code_tokens).into_iter().collect();
    let phrase_matches = bigrams(&request_tokens)
        .into_iter()
        .collect::<HashSet<_>>()
        .iter()
        .filter(|b| code_bigrams.contains(*b))
        .count();

    let overlapping = request_tokens
        .iter()
        .filter(|t| code_set.contains(t.as_str()))
        .count();

    TextSimilarity {
        jaccard: jaccard(&request_set, &code_set),
        phrase_matches,
        word_overlap: overlapping as f64 / request_tokens.len() as f64,
    }
}
