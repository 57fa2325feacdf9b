//! Benchmarking: compares a score with heuristic and historical baselines.
//!
//! Industry and code-type baselines are fixed heuristics cached per key in
//! moka caches owned by the scorer. The historical baseline and the trend come
//! from the score history.

use moka::sync::Cache;

use codematch_core::config::BenchmarkConfig;
use codematch_core::models::{
    BenchmarkResult, ClassificationCandidate, ClassificationRequest, CodeType, ConfidenceScore,
    PerformanceTier, TrendDirection,
};
use codematch_core::tracing::events;

use crate::history::tail_mean;
use crate::text;

const INDUSTRY_WEIGHT: f64 = 0.3;
const CODE_TYPE_WEIGHT: f64 = 0.25;
const HISTORICAL_WEIGHT: f64 = 0.25;
const PEER_WEIGHT: f64 = 0.2;

const WELL_DEFINED_CATEGORY_BONUS: f64 = 0.05;
const PEER_BASE: f64 = 0.70;
/// Assumed accuracy of the fixed baselines.
const BASELINE_ACCURACY: f64 = 0.8;
const TREND_TOLERANCE: f64 = 0.02;

/// Benchmark pass with its baseline caches.
pub struct Benchmarker {
    config: BenchmarkConfig,
    industry_cache: Cache<String, f64>,
    code_type_cache: Cache<CodeType, f64>,
}

impl Benchmarker {
    pub fn new(config: BenchmarkConfig) -> Self {
        let industry_cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .build();
        let code_type_cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .build();
        Self {
            config,
            industry_cache,
            code_type_cache,
        }
    }

    /// Run the pass. `history` is the series before this score is appended.
    pub fn apply(
        &self,
        score: &mut ConfidenceScore,
        candidate: &ClassificationCandidate,
        request: &ClassificationRequest,
        history: &[f64],
    ) {
        let code_type = candidate.code_type();
        let industry_benchmark = self.industry_benchmark(candidate);
        let code_type_benchmark = self.code_type_benchmark(code_type);
        let historical_benchmark =
            tail_mean(history, self.config.historical_window).unwrap_or(code_type_benchmark);
        let peer_benchmark = peer_benchmark(code_type, request);

        let overall_benchmark = (INDUSTRY_WEIGHT * industry_benchmark
            + CODE_TYPE_WEIGHT * code_type_benchmark
            + HISTORICAL_WEIGHT * historical_benchmark
            + PEER_WEIGHT * peer_benchmark)
            .clamp(0.0, 1.0);

        let before = score.overall();
        let gap = before - overall_benchmark;
        let performance = PerformanceTier::from_gap(gap);
        let data_quality = self.data_quality(history.len());
        let applied = data_quality >= self.config.quality_threshold;
        let adjustment_factor = performance.adjustment_factor();

        if applied {
            score.set_overall(before * adjustment_factor);
            events::benchmark_adjusted(
                candidate.code_value(),
                performance.name(),
                before,
                score.overall(),
            );
        }

        score.benchmark = Some(BenchmarkResult {
            industry_benchmark,
            code_type_benchmark,
            historical_benchmark,
            peer_benchmark,
            overall_benchmark,
            data_quality,
            gap,
            performance,
            adjustment_factor,
            applied,
            trend: trend(history, self.config.trend_window),
        });

        match performance {
            PerformanceTier::Excellent | PerformanceTier::Good => {
                score.recommend("score is above the benchmark for this code type")
            }
            PerformanceTier::Average => score.recommend("score is in line with the benchmark"),
            PerformanceTier::BelowAverage | PerformanceTier::Poor => {
                score.recommend("score is below the benchmark, compare with alternative codes")
            }
        }
        if !applied {
            score.recommend("collect more scoring history for reliable benchmarking");
        }
    }

    /// Drop cached baselines.
    pub fn clear(&self) {
        self.industry_cache.invalidate_all();
        self.code_type_cache.invalidate_all();
    }

    fn industry_benchmark(&self, candidate: &ClassificationCandidate) -> f64 {
        let code_type = candidate.code_type();
        let category = candidate.code.category.trim().to_lowercase();
        let key = format!("{code_type}:{category}");
        self.industry_cache.get_with(key, || {
            let bonus = if is_well_defined(&category) {
                WELL_DEFINED_CATEGORY_BONUS
            } else {
                0.0
            };
            industry_base(code_type) + bonus
        })
    }

    fn code_type_benchmark(&self, code_type: CodeType) -> f64 {
        self.code_type_cache
            .get_with(code_type, || code_type_base(code_type))
    }

    /// Blend of sample size, baseline accuracy, and history completeness.
    fn data_quality(&self, sample_size: usize) -> f64 {
        let min_sample = self.config.min_sample_size.max(1) as f64;
        let size = (sample_size as f64 / min_sample).min(1.0);
        let completeness = if sample_size > 0 { 1.0 } else { 0.75 };
        0.5 * size + 0.25 * BASELINE_ACCURACY + 0.25 * completeness
    }
}

fn industry_base(code_type: CodeType) -> f64 {
    match code_type {
        CodeType::Naics => 0.75,
        CodeType::Sic => 0.70,
        CodeType::Mcc => 0.72,
        CodeType::Other => 0.65,
    }
}

fn code_type_base(code_type: CodeType) -> f64 {
    match code_type {
        CodeType::Naics => 0.72,
        CodeType::Sic => 0.68,
        CodeType::Mcc => 0.70,
        CodeType::Other => 0.60,
    }
}

/// A category with at least two meaningful words.
fn is_well_defined(category: &str) -> bool {
    text::clean_tokens(category).len() >= 2
}

/// Longer, more specific business names tend to classify better.
fn peer_benchmark(code_type: CodeType, request: &ClassificationRequest) -> f64 {
    let words = text::clean_tokens(&request.business_name).len();
    let name_adjustment = match words {
        0 => -0.05,
        1 => -0.02,
        2 => 0.0,
        _ => 0.02,
    };
    let type_adjustment = match code_type {
        CodeType::Naics => 0.01,
        CodeType::Sic | CodeType::Other => 0.0,
        CodeType::Mcc => -0.01,
    };
    (PEER_BASE + name_adjustment + type_adjustment).clamp(0.0, 1.0)
}

/// Compare the last `window` scores with the `window` before them.
fn trend(history: &[f64], window: usize) -> TrendDirection {
    if window == 0 || history.len() < 2 * window {
        return TrendDirection::Stable;
    }
    let recent = &history[history.len() - window..];
    let previous = &history[history.len() - 2 * window..history.len() - window];
    let mean = |s: &[f64]| s.iter().sum::<f64>() / s.len() as f64;
    let delta = mean(recent) - mean(previous);
    if delta > TREND_TOLERANCE {
        TrendDirection::Improving
    } else if delta < -TREND_TOLERANCE {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

#[cfg(test)]
mod tests {
    use codematch_core::models::{ConfidenceFactors, IndustryCode};

    use super::*;

    fn candidate(code_type: CodeType) -> ClassificationCandidate {
        ClassificationCandidate::new(
            IndustryCode::new("5812", code_type, "Eating Places").with_category("Food Services"),
            0.7,
        )
    }

    fn score(v: f64) -> ConfidenceScore {
        ConfidenceScore::new(v, ConfidenceFactors::uniform(v))
    }

    #[test]
    fn empty_history_records_without_adjusting() {
        let bench = Benchmarker::new(BenchmarkConfig::default());
        let mut s = score(0.9);
        let req = ClassificationRequest::new("Main Street Diner");
        bench.apply(&mut s, &candidate(CodeType::Naics), &req, &[]);

        let result = s.benchmark.as_ref().expect("benchmark block");
        assert!(!result.applied);
        assert_eq!(s.overall(), 0.9);
        assert_eq!(result.historical_benchmark, result.code_type_benchmark);
        assert!((result.data_quality - 0.3875).abs() < 1e-12);
        assert!(s.recommendations.iter().any(|r| r.contains("history")));
    }

    #[test]
    fn full_history_applies_tier_factor() {
        let bench = Benchmarker::new(BenchmarkConfig::default());
        let history = vec![0.5; 100];
        let mut s = score(0.95);
        let req = ClassificationRequest::new("Main Street Diner");
        bench.apply(&mut s, &candidate(CodeType::Naics), &req, &history);

        let result = s.benchmark.as_ref().expect("benchmark block");
        assert!(result.applied);
        assert_eq!(result.performance, PerformanceTier::Excellent);
        assert!((s.overall() - 0.95 * 1.02).abs() < 1e-12);
        assert_eq!(result.trend, TrendDirection::Stable);
    }

    #[test]
    fn poor_score_is_reduced() {
        let bench = Benchmarker::new(BenchmarkConfig::default());
        let mut s = score(0.3);
        bench.apply(
            &mut s,
            &candidate(CodeType::Sic),
            &ClassificationRequest::new("Diner"),
            &[0.7; 120],
        );
        assert_eq!(
            s.benchmark.as_ref().map(|b| b.performance),
            Some(PerformanceTier::Poor)
        );
        assert!((s.overall() - 0.3 * 0.98).abs() < 1e-12);
    }

    #[test]
    fn industry_baseline_rewards_well_defined_category() {
        let bench = Benchmarker::new(BenchmarkConfig::default());
        let defined = bench.industry_benchmark(&candidate(CodeType::Naics));
        let mut vague = candidate(CodeType::Naics);
        vague.code.category = "Misc".to_string();
        assert!((defined - 0.80).abs() < 1e-12);
        assert!((bench.industry_benchmark(&vague) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn trend_compares_adjacent_windows() {
        let mut history = vec![0.5; 10];
        history.extend(vec![0.6; 10]);
        assert_eq!(trend(&history, 10), TrendDirection::Improving);
        history.extend(vec![0.4; 10]);
        assert_eq!(trend(&history, 10), TrendDirection::Declining);
        assert_eq!(trend(&[0.5; 5], 10), TrendDirection::Stable);
    }

    #[test]
    fn clear_keeps_results_consistent() {
        let bench = Benchmarker::new(BenchmarkConfig::default());
        let first = bench.code_type_benchmark(CodeType::Mcc);
        bench.clear();
        assert_eq!(bench.code_type_benchmark(CodeType::Mcc), first);
    }
}
