//! Utilization reading types
//!
//! A reading is constructed fresh on every sampler invocation and never
//! mutated. When a metric source is unreadable the sampler returns an
//! invalid reading with percent 0.0 instead of propagating an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One metric's utilization at sample time.
///
/// `percent` is conceptually in [0, 100] but transient sampling artifacts
/// may push it slightly outside; consumers must not assume strict bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationReading {
    /// Utilization percentage
    pub percent: f64,
    /// Whether the underlying source data was usable
    pub valid: bool,
}

impl UtilizationReading {
    /// A valid reading with the given percentage
    pub fn of(percent: f64) -> Self {
        Self {
            percent,
            valid: true,
        }
    }

    /// The reading returned when a metric source is missing or degenerate
    /// (absent fields, zero denominators, empty enumerations).
    pub fn unavailable() -> Self {
        Self {
            percent: 0.0,
            valid: false,
        }
    }
}

impl fmt::Display for UtilizationReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent)
    }
}

/// One mounted filesystem's utilization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskMountReading {
    /// Mount point path
    pub mount_path: String,
    /// Used capacity percentage, truncated to an integer
    pub percent_used: u8,
}

impl fmt::Display for DiskMountReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}%", self.mount_path, self.percent_used)
    }
}

/// Round a percentage to one decimal place.
pub(crate) fn round_to_tenth(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}
