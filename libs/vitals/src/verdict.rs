//! Decision engine
//!
//! The policy is deliberately lenient: the host is HEALTHY if ANY metric
//! is strictly below the threshold, and UNHEALTHY only when all three are
//! at or above it. A single metric with headroom is treated as evidence
//! the host can still absorb load.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::policy::ThresholdPolicy;
use crate::reading::UtilizationReading;

/// Overall health classification for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthState::Healthy => write!(f, "HEALTHY"),
            HealthState::Unhealthy => write!(f, "UNHEALTHY"),
        }
    }
}

/// Per-metric below-threshold flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFlags {
    pub cpu: bool,
    pub memory: bool,
    pub disk: bool,
}

impl MetricFlags {
    /// True when at least one metric is below the threshold
    pub fn any_below(&self) -> bool {
        self.cpu || self.memory || self.disk
    }

    /// Flags paired with their metric names, in reporting order
    pub fn named(&self) -> [(&'static str, bool); 3] {
        [
            ("CPU", self.cpu),
            ("Memory", self.memory),
            ("Disk", self.disk),
        ]
    }
}

/// The decision engine's output. Computed once per run, immutable.
///
/// Invariant: `state == Healthy` iff at least one flag in
/// `below_threshold` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub state: HealthState,
    pub below_threshold: MetricFlags,
}

/// Decide host health from the three readings and the policy.
///
/// Pure function: identical inputs always yield the identical verdict.
/// Invalid readings participate with their default 0.0 percent, so an
/// unmeasurable metric usually lands below any realistic threshold and
/// counts toward HEALTHY. That sharp edge is intentional and preserved;
/// callers who care can inspect `valid` on the readings themselves.
pub fn decide(
    cpu: UtilizationReading,
    memory: UtilizationReading,
    disk: UtilizationReading,
    policy: &ThresholdPolicy,
) -> Verdict {
    let below_threshold = MetricFlags {
        cpu: cpu.percent < policy.threshold_percent,
        memory: memory.percent < policy.threshold_percent,
        disk: disk.percent < policy.threshold_percent,
    };

    let state = if below_threshold.any_below() {
        HealthState::Healthy
    } else {
        HealthState::Unhealthy
    };

    Verdict {
        state,
        below_threshold,
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn policy(threshold: f64) -> ThresholdPolicy {
        ThresholdPolicy {
            threshold_percent: threshold,
            sample_interval_secs: 0,
        }
    }

    fn reading(percent: f64) -> UtilizationReading {
        UtilizationReading::of(percent)
    }

    #[test]
    fn test_all_metrics_at_or_above_is_unhealthy() {
        let v = decide(reading(70.0), reading(80.0), reading(90.0), &policy(60.0));
        assert_eq!(v.state, HealthState::Unhealthy);
        assert!(!v.below_threshold.cpu);
        assert!(!v.below_threshold.memory);
        assert!(!v.below_threshold.disk);
    }

    #[test]
    fn test_single_metric_below_is_healthy() {
        let v = decide(reading(50.0), reading(80.0), reading(90.0), &policy(60.0));
        assert_eq!(v.state, HealthState::Healthy);
        assert!(v.below_threshold.cpu);
        assert!(!v.below_threshold.memory);
        assert!(!v.below_threshold.disk);
    }

    #[test]
    fn test_invalid_reading_counts_as_below_threshold() {
        // An unmeasured metric defaults to 0.0 and passes the comparison
        let v = decide(
            UtilizationReading::unavailable(),
            reading(80.0),
            reading(90.0),
            &policy(60.0),
        );
        assert_eq!(v.state, HealthState::Healthy);
        assert!(v.below_threshold.cpu);
    }

    #[test]
    fn test_exactly_at_threshold_is_not_below() {
        // Strict comparison: value == threshold fails the flag
        let v = decide(reading(60.0), reading(60.0), reading(60.0), &policy(60.0));
        assert_eq!(v.state, HealthState::Unhealthy);
    }

    #[test]
    fn test_zero_threshold_is_always_unhealthy() {
        let v = decide(reading(0.0), reading(0.0), reading(0.0), &policy(0.0));
        assert_eq!(v.state, HealthState::Unhealthy);

        let v = decide(
            UtilizationReading::unavailable(),
            UtilizationReading::unavailable(),
            UtilizationReading::unavailable(),
            &policy(0.0),
        );
        assert_eq!(v.state, HealthState::Unhealthy);
    }

    #[test]
    fn test_real_number_comparison_no_truncation() {
        // 59.9 < 60 even though both truncate to the same integer range
        let v = decide(reading(59.9), reading(80.0), reading(90.0), &policy(60.0));
        assert_eq!(v.state, HealthState::Healthy);

        let v = decide(reading(60.1), reading(80.0), reading(90.0), &policy(60.0));
        assert_eq!(v.state, HealthState::Unhealthy);
    }

    #[test]
    fn test_healthy_iff_minimum_below_threshold() {
        let cases = [
            (10.0, 20.0, 30.0, 25.0),
            (90.0, 85.0, 95.0, 85.0),
            (0.0, 0.0, 0.0, 0.1),
            (50.0, 50.0, 50.0, 50.0),
            (33.3, 66.6, 99.9, 60.0),
        ];
        for (c, m, d, t) in cases {
            let v = decide(reading(c), reading(m), reading(d), &policy(t));
            let expect_healthy = c.min(m).min(d) < t;
            assert_eq!(
                v.state == HealthState::Healthy,
                expect_healthy,
                "cpu={c} mem={m} disk={d} threshold={t}"
            );
        }
    }

    #[test]
    fn test_decide_is_idempotent() {
        let p = policy(60.0);
        let first = decide(reading(42.0), reading(61.0), reading(88.0), &p);
        let second = decide(reading(42.0), reading(61.0), reading(88.0), &p);
        assert_eq!(first, second);
    }

    #[test]
    fn test_state_matches_flag_invariant() {
        let v = decide(reading(70.0), reading(10.0), reading(90.0), &policy(60.0));
        assert_eq!(v.state == HealthState::Healthy, v.below_threshold.any_below());
    }
}
