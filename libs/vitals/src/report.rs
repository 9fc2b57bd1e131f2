//! Health report aggregate
//!
//! Bundles one run's readings, mount detail, policy, and verdict so the
//! CLI can render or serialize a single coherent object.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::policy::ThresholdPolicy;
use crate::reading::{DiskMountReading, UtilizationReading};
use crate::sampler;
use crate::verdict::{self, Verdict};

/// Everything produced by one health check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub cpu: UtilizationReading,
    pub memory: UtilizationReading,
    pub disk: UtilizationReading,
    /// Per-mount disk detail, in enumeration order
    pub mounts: Vec<DiskMountReading>,
    pub threshold_percent: f64,
    pub verdict: Verdict,
}

impl HealthReport {
    /// Run the full sequential check: CPU (blocking for the interval
    /// window), then memory, then disk, then the decision.
    pub fn collect(policy: &ThresholdPolicy) -> Self {
        let cpu = sampler::cpu::sample(policy.sample_interval_secs);
        debug!("cpu reading: {:?}", cpu);
        let memory = sampler::memory::sample();
        debug!("memory reading: {:?}", memory);
        let (disk, mounts) = sampler::disk::sample();
        debug!("disk reading: {:?} ({} mounts)", disk, mounts.len());

        Self::from_readings(cpu, memory, disk, mounts, policy)
    }

    /// Build a report from already-sampled readings.
    pub fn from_readings(
        cpu: UtilizationReading,
        memory: UtilizationReading,
        disk: UtilizationReading,
        mounts: Vec<DiskMountReading>,
        policy: &ThresholdPolicy,
    ) -> Self {
        let verdict = verdict::decide(cpu, memory, disk, policy);
        Self {
            cpu,
            memory,
            disk,
            mounts,
            threshold_percent: policy.threshold_percent,
            verdict,
        }
    }
}
