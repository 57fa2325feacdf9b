use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Industry classification scheme a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodeType {
    /// North American Industry Classification System.
    Naics,
    /// Standard Industrial Classification.
    Sic,
    /// Merchant Category Code.
    Mcc,
    /// Any other scheme. All such codes share one ranking group.
    Other,
}

impl CodeType {
    pub const ALL: [CodeType; 4] = [Self::Naics, Self::Sic, Self::Mcc, Self::Other];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Naics => "NAICS",
            Self::Sic => "SIC",
            Self::Mcc => "MCC",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NAICS" => Ok(Self::Naics),
            "SIC" => Ok(Self::Sic),
            "MCC" => Ok(Self::Mcc),
            "OTHER" => Ok(Self::Other),
            other => Err(format!("unknown code type: {other}")),
        }
    }
}

/// How the upstream classifier arrived at a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Keyword,
    Description,
    Fuzzy,
    Semantic,
    Unknown,
}

impl Default for MatchType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl MatchType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Keyword => "keyword",
            Self::Description => "description",
            Self::Fuzzy => "fuzzy",
            Self::Semantic => "semantic",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A code from one of the classification schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryCode {
    /// Code value, e.g. "311811".
    pub code: String,
    pub code_type: CodeType,
    pub description: String,
    /// Category label, e.g. "Food Manufacturing".
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Scheme revision used for metadata lookup, e.g. "2022".
    #[serde(default)]
    pub version: String,
}

impl IndustryCode {
    pub fn new(
        code: impl Into<String>,
        code_type: CodeType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            code_type,
            description: description.into(),
            category: String::new(),
            keywords: Vec::new(),
            version: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// A proposed classification produced by the upstream classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationCandidate {
    pub code: IndustryCode,
    /// Classifier-side prior confidence in [0.0, 1.0].
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub matched_terms: Vec<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Externally supplied weight. Carried through, not used in scoring.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl ClassificationCandidate {
    pub fn new(code: IndustryCode, confidence: f64) -> Self {
        Self {
            code,
            confidence,
            match_type: MatchType::Unknown,
            matched_terms: Vec::new(),
            reasons: Vec::new(),
            weight: default_weight(),
        }
    }

    pub fn with_match(mut self, match_type: MatchType, matched_terms: Vec<String>) -> Self {
        self.match_type = match_type;
        self.matched_terms = matched_terms;
        self
    }

    pub fn code_value(&self) -> &str {
        &self.code.code
    }

    pub fn code_type(&self) -> CodeType {
        self.code.code_type
    }
}
