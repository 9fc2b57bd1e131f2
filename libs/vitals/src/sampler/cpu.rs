//! CPU utilization sampler
//!
//! Two-snapshot delta over the kernel's cumulative time-in-state counters:
//! read the counters, sleep for the interval window, read again, and
//! compute the busy share of the elapsed ticks. iowait counts as idle;
//! guest time is excluded from the busy/idle split entirely (the kernel
//! already folds it into user/nice).

use std::thread;
use std::time::Duration;

use procfs::{CpuTime, CurrentSI, KernelStats};
use tracing::{debug, warn};

use crate::reading::{round_to_tenth, UtilizationReading};

/// Aggregated tick counters from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CpuTotals {
    idle: u64,
    nonidle: u64,
}

impl CpuTotals {
    fn total(self) -> u64 {
        self.idle + self.nonidle
    }
}

/// Sample CPU utilization over `interval_secs` seconds.
///
/// Blocks the calling thread for the whole interval. An interval of 0 is
/// legal and yields two back-to-back reads; the resulting zero tick delta
/// is reported as an invalid reading rather than a division fault.
pub fn sample(interval_secs: u64) -> UtilizationReading {
    let first = match snapshot() {
        Ok(totals) => totals,
        Err(e) => {
            warn!("CPU counters unreadable: {}", e);
            return UtilizationReading::unavailable();
        },
    };

    thread::sleep(Duration::from_secs(interval_secs));

    let second = match snapshot() {
        Ok(totals) => totals,
        Err(e) => {
            warn!("CPU counters unreadable: {}", e);
            return UtilizationReading::unavailable();
        },
    };

    usage_between(first, second)
}

fn snapshot() -> procfs::ProcResult<CpuTotals> {
    let stats = KernelStats::current()?;
    Ok(totals_of(&stats.total))
}

fn totals_of(t: &CpuTime) -> CpuTotals {
    CpuTotals {
        idle: t.idle + t.iowait.unwrap_or(0),
        nonidle: t.user
            + t.nice
            + t.system
            + t.irq.unwrap_or(0)
            + t.softirq.unwrap_or(0)
            + t.steal.unwrap_or(0),
    }
}

/// Usage percentage from two snapshots.
///
/// A non-positive total delta (zero interval, clock anomaly, counter
/// wraparound) yields an invalid reading.
fn usage_between(first: CpuTotals, second: CpuTotals) -> UtilizationReading {
    let delta_total = second.total() as i128 - first.total() as i128;
    let delta_idle = second.idle as i128 - first.idle as i128;

    if delta_total <= 0 {
        debug!("CPU tick delta not positive ({}), reading invalid", delta_total);
        return UtilizationReading::unavailable();
    }

    let busy = (delta_total - delta_idle) as f64;
    let percent = busy / delta_total as f64 * 100.0;
    UtilizationReading::of(round_to_tenth(percent))
}
