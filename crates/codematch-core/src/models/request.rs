use serde::{Deserialize, Serialize};

use super::candidate::CodeType;

/// The business being classified, plus caller preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// Required for meaningful scoring. A blank name is accepted but lowers
    /// the validation factor and raises a warning.
    pub business_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub preferred_code_types: Vec<CodeType>,
    /// Truncates the overall ranked list when set. Per-type groups are built
    /// before truncation and are unaffected. `Some(0)` means no limit.
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Confidence floor used when the caller passes no ranking criteria.
    #[serde(default)]
    pub min_confidence: Option<f64>,
}

impl ClassificationRequest {
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
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

    pub fn with_preferred_types(mut self, types: Vec<CodeType>) -> Self {
        self.preferred_code_types = types;
        self
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn has_business_name(&self) -> bool {
        !self.business_name.trim().is_empty()
    }

    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    /// Business name followed by the description.
    pub fn name_and_description(&self) -> String {
        format!("{} {}", self.business_name, self.description_text())
    }

    /// Name, description, and explicit keywords, lowercased.
    pub fn combined_text(&self) -> String {
        let mut text = self.name_and_description();
        for keyword in &self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        text.to_lowercase()
    }

    pub fn prefers(&self, code_type: CodeType) -> bool {
        self.preferred_code_types.contains(&code_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_includes_keywords_lowercased() {
        let req = ClassificationRequest::new("Joe's Bakery")
            .with_description("Fresh Bread")
            .with_keywords(["Pastry"]);
        assert_eq!(req.combined_text(), "joe's bakery fresh bread pastry");
    }

    #[test]
    fn blank_fields_are_reported_missing() {
        let req = ClassificationRequest::new("   ").with_description(" ");
        assert!(!req.has_business_name());
        assert!(!req.has_description());
    }
}
