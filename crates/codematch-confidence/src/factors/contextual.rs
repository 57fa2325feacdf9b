//! Contextual factor: website host overlap and code-type preference.

use std::sync::LazyLock;

use regex::Regex;

use codematch_core::models::{ClassificationCandidate, ClassificationRequest};

use crate::{lexicon, text};

const BASE: f64 = 0.5;
const WEBSITE_WEIGHT: f64 = 0.3;
const PREFERRED_TYPE_BONUS: f64 = 0.2;

/// Captures the host of a URL, without scheme, `www.`, port, or path.
static HOST_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:[a-z][a-z0-9+.-]*://)?(?:www\.)?([^/:?#\s]+)").ok()
});

/// Meaningful words in a website host.
///
/// The last label (TLD) is dropped, the rest split on `.` and `-`, generic
/// business suffixes removed, and words shorter than three characters skipped.
pub fn website_keywords(website: &str) -> Vec<String> {
    let Some(pattern) = HOST_PATTERN.as_ref() else {
        return Vec::new();
    };
    let Some(host) = pattern.captures(website).and_then(|c| c.get(1)) else {
        return Vec::new();
    };
    let host = host.as_str().to_lowercase();

    let mut labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() > 1 {
        labels.pop();
    }

    let mut words: Vec<String> = Vec::new();
    for word in labels.iter().flat_map(|l| l.split('-')) {
        if word.chars().count() >= 3
            && !lexicon::is_business_suffix(word)
            && !words.iter().any(|w| w == word)
        {
            words.push(word.to_string());
        }
    }
    words
}

/// Factor 7: website words matching the code text, plus a bonus when the
/// request prefers this code type.
pub fn contextual(candidate: &ClassificationCandidate, request: &ClassificationRequest) -> f64 {
    let mut score = BASE;

    let words = request
        .website
        .as_deref()
        .map(website_keywords)
        .unwrap_or_default();
    if !words.is_empty() {
        let code_text = format!(
            "{} {} {}",
            candidate.code.description,
            candidate.code.category,
            candidate.code.keywords.join(" ")
        )
        .to_lowercase();
        let code_tokens: Vec<String> = text::tokenize(&code_text)
            .into_iter()
            .filter(|t| t.chars().count() >= 4)
            .collect();

        // Host words are often compounds ("sunrisebakery"), so a long code
        // token inside the word also counts.
        let matched = words
            .iter()
            .filter(|w| {
                code_text.contains(w.as_str()) || code_tokens.iter().any(|t| w.contains(t.as_str()))
            })
            .count();
        score += WEBSITE_WEIGHT * matched as f64 / words.len() as f64;
    }

    if request.prefers(candidate.code_type()) {
        score += PREFERRED_TYPE_BONUS;
    }

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use codematch_core::models::{CodeType, IndustryCode};

    use super::*;

    fn bakery() -> ClassificationCandidate {
        ClassificationCandidate::new(
            IndustryCode::new("311811", CodeType::Naics, "Retail Bakeries")
                .with_keywords(["bakery", "bread"]),
            0.7,
        )
    }

    #[test]
    fn website_keywords_strip_scheme_www_tld_and_suffixes() {
        assert_eq!(
            website_keywords("https://www.sunrise-bakery-inc.com/about"),
            vec!["sunrise", "bakery"]
        );
        assert_eq!(website_keywords("shop.example.co"), vec!["example"]);
        assert!(website_keywords("").is_empty());
    }

    #[test]
    fn compound_host_words_match_code_tokens() {
        let req = ClassificationRequest::new("Sunrise").with_website("sunrisebakery.com");
        // "sunrisebakery" contains "bakery".
        assert!((contextual(&bakery(), &req) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn preferred_type_adds_bonus() {
        let req = ClassificationRequest::new("Sunrise").with_preferred_types(vec![CodeType::Naics]);
        assert!((contextual(&bakery(), &req) - 0.7).abs() < 1e-12);

        let other = ClassificationRequest::new("Sunrise").with_preferred_types(vec![CodeType::Sic]);
        assert_eq!(contextual(&bakery(), &other), BASE);
    }
}
