//! Test fixtures for codematch: JSON scenarios, candidate builders, and a
//! fixed-score scorer for exercising the ranking engine in isolation.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use codematch_core::errors::ScoringError;
use codematch_core::models::{
    ClassificationCandidate, ClassificationRequest, CodeMetadata, CodeType, ConfidenceFactors,
    ConfidenceScore, IndustryCode,
};
use codematch_core::traits::CandidateScorer;

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// Metadata for one code at one scheme version.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataEntry {
    pub code: String,
    pub version: String,
    pub metadata: CodeMetadata,
}

/// A request with its competing candidates and the metadata to score them.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub request: ClassificationRequest,
    pub candidates: Vec<ClassificationCandidate>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
    /// Code expected to rank first, when the scenario asserts one.
    #[serde(default)]
    pub expected_best: Option<String>,
}

/// Load `scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Candidate with a description, category, and prior confidence.
pub fn candidate(
    code: &str,
    code_type: CodeType,
    description: &str,
    category: &str,
    prior: f64,
) -> ClassificationCandidate {
    ClassificationCandidate::new(
        IndustryCode::new(code, code_type, description).with_category(category),
        prior,
    )
}

/// Minimal candidate whose prior confidence doubles as its fixed score.
pub fn scored(code: &str, code_type: CodeType, confidence: f64) -> ClassificationCandidate {
    candidate(code, code_type, &format!("Code {code}"), "General", confidence)
}

/// Scorer that returns a predetermined overall score.
///
/// Each candidate scores its own prior confidence unless an override is set
/// for its code. Factors are uniform at the score. Blank codes are rejected
/// the same way the real scorer rejects them.
#[derive(Debug, Default, Clone)]
pub struct FixedScoreScorer {
    overrides: HashMap<String, f64>,
}

impl FixedScoreScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, code: &str, score: f64) -> Self {
        self.overrides.insert(code.to_string(), score);
        self
    }
}

impl CandidateScorer for FixedScoreScorer {
    fn score(
        &self,
        candidate: &ClassificationCandidate,
        _request: &ClassificationRequest,
    ) -> Result<ConfidenceScore, ScoringError> {
        if candidate.code_value().trim().is_empty() {
            return Err(ScoringError::InvalidCandidate {
                reason: "candidate has no code value".to_string(),
            });
        }
        let overall = self
            .overrides
            .get(candidate.code_value())
            .copied()
            .unwrap_or(candidate.confidence);
        Ok(ConfidenceScore::new(overall, ConfidenceFactors::uniform(overall)))
    }
}
