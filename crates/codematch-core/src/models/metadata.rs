use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quality tier reported by the metadata store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    High,
    Medium,
    Low,
    Unknown,
}

impl DataQuality {
    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-code quality and usage metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeMetadata {
    pub data_quality: DataQuality,
    pub last_updated: DateTime<Utc>,
    /// Where the code definition came from, e.g. "US Census Bureau".
    pub source: String,
    pub usage_count: u64,
}

impl CodeMetadata {
    /// Whole days between `last_updated` and `now`, never negative.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_updated).num_days().max(0)
    }
}
