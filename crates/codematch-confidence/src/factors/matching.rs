//! Text-derived factors: text, keyword, name, and category match.

use std::collections::HashSet;

use codematch_core::models::{ClassificationCandidate, ClassificationRequest};

use crate::lexicon::{CATEGORY_SYNONYMS, INDUSTRY_INDICATORS};
use crate::text;

const JACCARD_WEIGHT: f64 = 0.6;
const PHRASE_WEIGHT: f64 = 0.2;
const OVERLAP_WEIGHT: f64 = 0.2;

const KEYWORD_BONUS_PER_MATCH: f64 = 0.1;
const KEYWORD_BONUS_CAP: f64 = 0.3;

/// Score given to a category matched only through a synonym.
const SYNONYM_MATCH_SCORE: f64 = 0.8;

/// Factor 1: overlap between the business text and the code description.
///
/// The three weighted terms may sum past 1.0 (several matching phrases); the
/// final clamp is the ceiling, nothing is renormalized.
pub fn text_match(candidate: &ClassificationCandidate, request: &ClassificationRequest) -> f64 {
    let sim = text::compare(&request.name_and_description(), &candidate.code.description);
    let score = JACCARD_WEIGHT * sim.jaccard
        + PHRASE_WEIGHT * sim.phrase_matches as f64
        + OVERLAP_WEIGHT * sim.word_overlap;
    score.clamp(0.0, 1.0)
}

/// Factor 2: share of the code's keywords found in the request text, plus a
/// small bonus for the raw match count.
pub fn keyword_match(candidate: &ClassificationCandidate, request: &ClassificationRequest) -> f64 {
    let keywords: Vec<String> = candidate
        .code
        .keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return 0.0;
    }

    let combined = request.combined_text();
    let matches = keywords.iter().filter(|k| combined.contains(k.as_str())).count();

    let fraction = matches as f64 / keywords.len() as f64;
    let bonus = (matches as f64 * KEYWORD_BONUS_PER_MATCH).min(KEYWORD_BONUS_CAP);
    (fraction + bonus).clamp(0.0, 1.0)
}

/// Factor 3: business-name words found in the code description, averaged
/// with how many of the industries the name signals the description shares.
///
/// When the name signals no known industry the word fraction stands alone.
pub fn name_match(candidate: &ClassificationCandidate, request: &ClassificationRequest) -> f64 {
    let description = candidate.code.description.to_lowercase();
    let name_tokens: Vec<String> = text::tokenize(&request.business_name)
        .into_iter()
        .filter(|w| w.chars().count() > 2)
        .collect();
    if name_tokens.is_empty() {
        return 0.0;
    }

    let found = name_tokens
        .iter()
        .filter(|w| description.contains(w.as_str()))
        .count();
    let word_fraction = found as f64 / name_tokens.len() as f64;

    let name_set: HashSet<&str> = name_tokens.iter().map(String::as_str).collect();
    let description_tokens = text::tokenize(&description);
    let description_set: HashSet<&str> = description_tokens.iter().map(String::as_str).collect();

    let recognized: Vec<&[&str]> = INDUSTRY_INDICATORS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| name_set.contains(w)))
        .map(|(_, words)| *words)
        .collect();
    if recognized.is_empty() {
        return word_fraction.clamp(0.0, 1.0);
    }

    let shared = recognized
        .iter()
        .filter(|words| words.iter().any(|w| description_set.contains(w)))
        .count();
    let indicator_fraction = shared as f64 / recognized.len() as f64;

    ((word_fraction + indicator_fraction) / 2.0).clamp(0.0, 1.0)
}

/// Factor 4: the code's category words found in the request, or a synonym
/// hit from the category table, whichever is stronger.
pub fn category_match(candidate: &ClassificationCandidate, request: &ClassificationRequest) -> f64 {
    let category = candidate.code.category.to_lowercase();
    let category_words = text::clean_tokens(&category);
    if category_words.is_empty() {
        return 0.0;
    }

    let request_text = request.combined_text();
    let direct = category_words
        .iter()
        .filter(|w| request_text.contains(w.as_str()))
        .count() as f64
        / category_words.len() as f64;

    let request_tokens = text::tokenize(&request_text);
    let request_set: HashSet<&str> = request_tokens.iter().map(String::as_str).collect();
    let synonym_hit = CATEGORY_SYNONYMS
        .iter()
        .filter(|(key, _)| category.contains(key))
        .any(|(_, synonyms)| synonyms.iter().any(|s| request_set.contains(s)));
    let synonym = if synonym_hit { SYNONYM_MATCH_SCORE } else { 0.0 };

    direct.max(synonym).clamp(0.0, 1.0)
}
