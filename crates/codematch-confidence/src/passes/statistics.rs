//! Statistical validation: places the score within the rolling history.
//!
//! This is a display-level approximation. The history is treated as a normal
//! sample regardless of its real shape.

use statrs::distribution::{ContinuousCDF, Normal};

use codematch_core::config::StatisticsConfig;
use codematch_core::models::{ConfidenceScore, StatisticalMetrics, ValidationStatus};
use codematch_core::tracing::events;

use crate::history::mean_std;

/// Two-sided 95% interval multiplier.
const Z_95: f64 = 1.96;
const MIN_STD_DEV: f64 = 1e-9;

/// `history` is the series as it stood before this score was appended.
pub fn apply(score: &mut ConfidenceScore, history: &[f64], config: &StatisticsConfig, code: &str) {
    let overall = score.overall();
    let (mean, std_dev) = mean_std(history);

    let z_score = if std_dev < MIN_STD_DEV {
        0.0
    } else {
        (overall - mean) / std_dev
    };
    let half_width = Z_95 * std_dev;
    let statistically_valid = z_score.abs() < config.z_score_threshold;

    score.statistics = Some(StatisticalMetrics {
        sample_size: history.len(),
        mean,
        std_dev,
        z_score,
        p_value: two_sided_p_value(z_score),
        confidence_interval: (
            (overall - half_width).clamp(0.0, 1.0),
            (overall + half_width).clamp(0.0, 1.0),
        ),
        statistically_valid,
    });

    if !statistically_valid {
        events::statistical_outlier(code, z_score, history.len());
        score.flag(
            ValidationStatus::Warning,
            format!("score is {z_score:.2} standard deviations from the historical mean"),
        );
    }
}

fn two_sided_p_value(z: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(normal) => (2.0 * (1.0 - normal.cdf(z.abs()))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use codematch_core::models::ConfidenceFactors;

    use super::*;

    fn score(v: f64) -> ConfidenceScore {
        ConfidenceScore::new(v, ConfidenceFactors::uniform(v))
    }

    #[test]
    fn empty_history_is_valid_with_zero_z() {
        let mut s = score(0.7);
        apply(&mut s, &[], &StatisticsConfig::default(), "1234");
        let stats = s.statistics.expect("statistics block");
        assert_eq!(stats.sample_size, 0);
        assert_eq!(stats.z_score, 0.0);
        assert_eq!(stats.p_value, 1.0);
        assert_eq!(stats.confidence_interval, (0.7, 0.7));
        assert!(stats.statistically_valid);
        assert_eq!(s.validation_status, ValidationStatus::Valid);
    }

    #[test]
    fn outlier_is_flagged_as_warning() {
        let history = [0.5, 0.52, 0.48, 0.5, 0.51, 0.49];
        let mut s = score(0.95);
        apply(&mut s, &history, &StatisticsConfig::default(), "1234");
        let stats = s.statistics.as_ref().expect("statistics block");
        assert!(stats.z_score > 2.0);
        assert!(stats.p_value < 0.05);
        assert!(!stats.statistically_valid);
        assert_eq!(s.validation_status, ValidationStatus::Warning);
    }

    #[test]
    fn interval_is_clamped() {
        let history = [0.0, 1.0];
        let mut s = score(0.9);
        apply(&mut s, &history, &StatisticsConfig::default(), "1234");
        let (lo, hi) = s.statistics.expect("statistics block").confidence_interval;
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);
    }
}
