use codematch_core::models::{ConfidenceLevel, PerformanceTier, ValidationStatus};
use proptest::prelude::*;

fn tier_rank(tier: PerformanceTier) -> u8 {
    match tier {
        PerformanceTier::Poor => 0,
        PerformanceTier::BelowAverage => 1,
        PerformanceTier::Average => 2,
        PerformanceTier::Good => 3,
        PerformanceTier::Excellent => 4,
    }
}

fn status_strategy() -> impl Strategy<Value = ValidationStatus> {
    prop_oneof![
        Just(ValidationStatus::Valid),
        Just(ValidationStatus::Warning),
        Just(ValidationStatus::Invalid),
    ]
}

proptest! {
    #[test]
    fn level_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ConfidenceLevel::from_score(lo) <= ConfidenceLevel::from_score(hi));
    }

    #[test]
    fn performance_tier_is_monotonic_in_gap(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (t_lo, t_hi) = (PerformanceTier::from_gap(lo), PerformanceTier::from_gap(hi));
        prop_assert!(tier_rank(t_lo) <= tier_rank(t_hi));
        prop_assert!(t_lo.adjustment_factor() <= t_hi.adjustment_factor());
    }

    #[test]
    fn escalation_never_recovers(steps in prop::collection::vec(status_strategy(), 0..10)) {
        let mut status = ValidationStatus::Valid;
        let mut worst = ValidationStatus::Valid;
        for step in steps {
            status.escalate(step);
            worst = worst.max(step);
            prop_assert_eq!(status, worst);
        }
    }
}
