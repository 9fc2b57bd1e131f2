//! Threshold policy configuration
//!
//! Caller-supplied numbers are validated here, before any sampling runs.
//! Malformed input is a configuration error, never a runtime fault inside
//! the samplers or the decision engine.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitalsError};

/// Default utilization threshold percentage
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 60.0;

/// Default CPU sampling window in seconds
pub const DEFAULT_SAMPLE_INTERVAL_SECS: u64 = 1;

/// Threshold policy for one health check run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Cutoff percentage a metric must stay strictly below to count as healthy
    pub threshold_percent: f64,
    /// CPU sampling window in seconds (0 is legal: two back-to-back reads)
    pub sample_interval_secs: u64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            sample_interval_secs: DEFAULT_SAMPLE_INTERVAL_SECS,
        }
    }
}

impl ThresholdPolicy {
    /// Build a validated policy.
    pub fn new(threshold_percent: f64, sample_interval_secs: u64) -> Result<Self> {
        let policy = Self {
            threshold_percent,
            sample_interval_secs,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check that the policy values are well-formed numbers.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_percent.is_finite() {
            return Err(VitalsError::invalid(
                "threshold",
                "must be a finite number",
            ));
        }
        if self.threshold_percent < 0.0 {
            return Err(VitalsError::invalid(
                "threshold",
                format!("must be >= 0, got {}", self.threshold_percent),
            ));
        }
        Ok(())
    }
}

/// Parse a threshold percentage from caller input.
///
/// Rejects non-numeric, non-finite, and negative input instead of
/// silently coercing.
pub fn parse_threshold(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| VitalsError::config(format!("threshold is not a number: '{input}'")))?;
    if !value.is_finite() {
        return Err(VitalsError::config(format!(
            "threshold is not a finite number: '{input}'"
        )));
    }
    if value < 0.0 {
        return Err(VitalsError::config(format!(
            "threshold must be >= 0, got {value}"
        )));
    }
    Ok(value)
}

/// Parse a sample interval in seconds from caller input.
pub fn parse_interval(input: &str) -> Result<u64> {
    input.trim().parse().map_err(|_| {
        VitalsError::config(format!(
            "interval is not a non-negative integer: '{input}'"
        ))
    })
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = ThresholdPolicy::default();
        assert_eq!(policy.threshold_percent, 60.0);
        assert_eq!(policy.sample_interval_secs, 1);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_is_legal() {
        assert!(ThresholdPolicy::new(0.0, 1).is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = ThresholdPolicy::new(-5.0, 1).unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        assert!(ThresholdPolicy::new(f64::NAN, 1).is_err());
        assert!(ThresholdPolicy::new(f64::INFINITY, 1).is_err());
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("60").unwrap(), 60.0);
        assert_eq!(parse_threshold("72.5").unwrap(), 72.5);
        assert_eq!(parse_threshold(" 0 ").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_threshold_rejects_garbage() {
        assert!(parse_threshold("sixty").is_err());
        assert!(parse_threshold("").is_err());
        assert!(parse_threshold("-1").is_err());
        assert!(parse_threshold("NaN").is_err());
        assert!(parse_threshold("inf").is_err());
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("0").unwrap(), 0);
        assert_eq!(parse_interval("5").unwrap(), 5);
        assert!(parse_interval("-1").is_err());
        assert!(parse_interval("1.5").is_err());
        assert!(parse_interval("soon").is_err());
    }
}
