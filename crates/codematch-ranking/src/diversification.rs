//! Diversification bonus for results that widen category coverage.

use std::collections::{BTreeMap, BTreeSet};

use codematch_core::models::CodeType;

/// Bonus for a result whose type is already represented, but not by its category.
pub const DIVERSITY_BONUS: f64 = 0.05;

/// What diversification needs to know about one result.
#[derive(Debug, Clone)]
pub struct DiversityKey {
    pub code_type: CodeType,
    pub category: String,
    pub base_score: f64,
    pub tie_breaker: f64,
}

/// Bonus per item, in input order.
///
/// Items are visited best first. The first item of a type gets nothing; a later
/// item earns the bonus when no earlier item of its type shares its category.
pub fn bonuses(items: &[DiversityKey]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .base_score
            .total_cmp(&items[a].base_score)
            .then(items[b].tie_breaker.total_cmp(&items[a].tie_breaker))
    });

    let mut seen: BTreeMap<CodeType, BTreeSet<String>> = BTreeMap::new();
    let mut bonus = vec![0.0; items.len()];
    for i in order {
        let item = &items[i];
        let category = item.category.trim().to_lowercase();
        let categories = seen.entry(item.code_type).or_default();
        if !categories.is_empty() && !categories.contains(&category) {
            bonus[i] = DIVERSITY_BONUS;
        }
        categories.insert(category);
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code_type: CodeType, category: &str, base_score: f64) -> DiversityKey {
        DiversityKey {
            code_type,
            category: category.to_string(),
            base_score,
            tie_breaker: 0.0,
        }
    }

    #[test]
    fn new_category_within_type_earns_bonus() {
        let items = [
            key(CodeType::Naics, "Food", 0.9),
            key(CodeType::Naics, "Retail", 0.8),
            key(CodeType::Naics, "food", 0.7),
            key(CodeType::Sic, "Retail", 0.6),
        ];
        assert_eq!(bonuses(&items), vec![0.0, DIVERSITY_BONUS, 0.0, 0.0]);
    }

    #[test]
    fn visiting_order_follows_score_not_input() {
        let items = [key(CodeType::Mcc, "Retail", 0.5), key(CodeType::Mcc, "Food", 0.9)];
        assert_eq!(bonuses(&items), vec![DIVERSITY_BONUS, 0.0]);
    }
}
