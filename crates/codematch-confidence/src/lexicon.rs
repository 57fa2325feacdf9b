//! Fixed word lists behind the text heuristics.

/// English function words dropped before similarity comparisons.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "in", "is", "it",
    "its", "of", "on", "or", "our", "that", "the", "their", "this", "to", "we", "with", "you",
    "your", "all", "other", "except", "not", "nec",
];

/// Category name to words that signal it in a business name.
pub const INDUSTRY_INDICATORS: &[(&str, &[&str])] = &[
    ("restaurant", &["restaurant", "diner", "grill", "cafe", "bistro", "eatery", "kitchen", "pizzeria"]),
    ("bakery", &["bakery", "bakeries", "bake", "bread", "pastry", "patisserie", "donut"]),
    ("retail", &["store", "shop", "boutique", "outlet", "mart", "market", "retail"]),
    ("construction", &["construction", "builders", "contracting", "contractor", "roofing", "remodeling"]),
    ("technology", &["software", "tech", "digital", "systems", "data", "cloud", "computing"]),
    ("healthcare", &["clinic", "medical", "health", "dental", "pharmacy", "hospital", "therapy"]),
    ("automotive", &["auto", "motors", "garage", "tire", "car", "vehicle", "automotive"]),
    ("finance", &["bank", "capital", "financial", "finance", "credit", "lending", "insurance"]),
    ("legal", &["law", "legal", "attorney", "attorneys", "lawyers", "counsel"]),
    ("real_estate", &["realty", "properties", "estate", "homes", "realtors", "property"]),
    ("beauty", &["salon", "spa", "beauty", "barber", "nails", "cosmetics"]),
    ("fitness", &["gym", "fitness", "yoga", "crossfit", "pilates", "athletic"]),
    ("hospitality", &["hotel", "inn", "motel", "lodge", "resort", "suites"]),
    ("transportation", &["trucking", "logistics", "freight", "transport", "shipping", "courier"]),
    ("education", &["school", "academy", "learning", "tutoring", "education", "institute"]),
    ("consulting", &["consulting", "consultants", "advisors", "advisory", "partners"]),
];

/// Category keyword to request words that imply it.
pub const CATEGORY_SYNONYMS: &[(&str, &[&str])] = &[
    ("food", &["restaurant", "cafe", "bakery", "catering", "diner", "grill", "kitchen", "meal"]),
    ("retail", &["store", "shop", "boutique", "sell", "sales", "merchandise", "outlet"]),
    ("manufacturing", &["factory", "produce", "fabrication", "assembly", "plant", "mill"]),
    ("construction", &["builder", "contractor", "renovation", "remodel", "roofing", "building"]),
    ("health", &["clinic", "medical", "doctor", "dental", "therapy", "wellness", "care"]),
    ("professional", &["consulting", "advisory", "legal", "accounting", "services"]),
    ("technology", &["software", "app", "platform", "cloud", "it", "computer", "digital"]),
    ("finance", &["bank", "lending", "loan", "investment", "insurance", "credit"]),
    ("transportation", &["trucking", "delivery", "freight", "logistics", "shipping"]),
    ("accommodation", &["hotel", "motel", "inn", "lodging", "resort"]),
    ("education", &["school", "tutoring", "training", "academy", "courses"]),
    ("real estate", &["realty", "property", "rental", "leasing", "homes"]),
];

/// Substrings that mark a metadata source as authoritative.
pub const AUTHORITATIVE_SOURCES: &[&str] = &[
    "official",
    "census",
    "bls",
    "government",
    "naics association",
    "sec",
    "osha",
];

/// Generic words stripped from website host labels.
pub const BUSINESS_SUFFIXES: &[&str] = &[
    "inc", "llc", "ltd", "corp", "co", "company", "group", "online", "shop", "store",
    "services", "the", "official", "home", "web", "site", "app",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

pub fn is_business_suffix(word: &str) -> bool {
    BUSINESS_SUFFIXES.contains(&word)
}

pub fn is_authoritative_source(source: &str) -> bool {
    let source = source.to_lowercase();
    AUTHORITATIVE_SOURCES.iter().any(|s| {
        // Short markers must match whole words so "second" is not "sec".
        if s.len() <= 4 {
            source
                .split(|c: char| !c.is_alphanumeric())
                .any(|w| w == *s)
        } else {
            source.contains(s)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authoritative_sources_match_whole_short_words() {
        assert!(is_authoritative_source("US Census Bureau"));
        assert!(is_authoritative_source("SEC EDGAR"));
        assert!(!is_authoritative_source("second-hand listing"));
        assert!(!is_authoritative_source("crowd sourced"));
    }

    #[test]
    fn stop_words_are_lowercase() {
        assert!(STOP_WORDS.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
