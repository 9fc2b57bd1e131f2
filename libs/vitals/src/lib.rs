//! Host vitals library
//!
//! Single-shot, single-host health evaluation:
//! - sampling of CPU, memory, and disk utilization
//! - a lenient any-metric-below-threshold decision policy
//! - optional human-readable reasoning for the verdict
//!
//! The library performs no terminal output and never exits the process;
//! rendering and exit-code mapping belong to the `checkup` binary.

pub mod error;
pub mod explain;
pub mod policy;
pub mod reading;
pub mod report;
pub mod sampler;
pub mod verdict;

pub use error::{Result, VitalsError};
pub use policy::ThresholdPolicy;
pub use reading::{DiskMountReading, UtilizationReading};
pub use report::HealthReport;
pub use verdict::{decide, HealthState, MetricFlags, Verdict};
