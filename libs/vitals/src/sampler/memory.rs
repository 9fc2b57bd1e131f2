//! Memory utilization sampler
//!
//! Uses the kernel's "available" estimate rather than free memory, so
//! reclaimable caches and buffers count as headroom.

use procfs::{Current, Meminfo};
use tracing::warn;

use crate::reading::{round_to_tenth, UtilizationReading};

/// Sample current memory utilization.
pub fn sample() -> UtilizationReading {
    match Meminfo::current() {
        Ok(info) => usage_of(info.mem_total, info.mem_available),
        Err(e) => {
            warn!("Memory source unreadable: {}", e);
            UtilizationReading::unavailable()
        },
    }
}

/// Usage percentage from total and kernel-reported available bytes.
///
/// Old kernels omit the available field; that and a zero total both yield
/// an invalid reading.
fn usage_of(total: u64, available: Option<u64>) -> UtilizationReading {
    let Some(available) = available else {
        warn!("Memory source has no available-memory field");
        return UtilizationReading::unavailable();
    };
    if total == 0 {
        warn!("Memory source reports zero total capacity");
        return UtilizationReading::unavailable();
    }

    let used = total.saturating_sub(available);
    let percent = used as f64 / total as f64 * 100.0;
    UtilizationReading::of(round_to_tenth(percent))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_usage_from_total_and_available() {
        // 16 GiB total, 4 GiB available -> 75.0% used
        let r = usage_of(16 * GIB, Some(4 * GIB));
        assert_eq!(r, UtilizationReading::of(75.0));
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 2/3 used -> 66.666..% -> 66.7%
        let r = usage_of(3 * GIB, Some(GIB));
        assert_eq!(r, UtilizationReading::of(66.7));
    }

    #[test]
    fn test_missing_available_field_is_invalid() {
        assert_eq!(usage_of(16 * GIB, None), UtilizationReading::unavailable());
    }

    #[test]
    fn test_zero_total_is_invalid_not_a_fault() {
        assert_eq!(usage_of(0, Some(GIB)), UtilizationReading::unavailable());
    }

    #[test]
    fn test_available_above_total_saturates() {
        // Transient artifact: available momentarily above total
        let r = usage_of(GIB, Some(2 * GIB));
        assert_eq!(r, UtilizationReading::of(0.0));
    }
}
