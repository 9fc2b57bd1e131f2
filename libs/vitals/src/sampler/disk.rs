//! Disk utilization sampler
//!
//! Enumerates real mounted filesystems and reports each mount's used
//! capacity as a truncated integer percentage. The scalar reading is the
//! worst mount, since a single full filesystem is enough to take the
//! host down.

use sysinfo::Disks;
use tracing::debug;

use crate::reading::{DiskMountReading, UtilizationReading};

/// Sample disk utilization across all eligible mounts.
///
/// Returns the worst-mount scalar reading plus the per-mount detail in
/// enumeration order. Zero eligible mounts yields an invalid reading and
/// an empty detail list.
pub fn sample() -> (UtilizationReading, Vec<DiskMountReading>) {
    let disks = Disks::new_with_refreshed_list();

    let mut mounts = Vec::with_capacity(disks.list().len());
    for disk in disks.list() {
        let total = disk.total_space();
        // Virtual/in-memory filesystems surface here with zero capacity
        if total == 0 {
            debug!("skipping zero-capacity mount {:?}", disk.mount_point());
            continue;
        }
        let used = total.saturating_sub(disk.available_space());
        mounts.push(DiskMountReading {
            mount_path: disk.mount_point().display().to_string(),
            percent_used: percent_used(used, total),
        });
    }

    let scalar = worst_of(&mounts);
    (scalar, mounts)
}

/// Integer used-capacity percentage, truncated (never rounded up).
fn percent_used(used: u64, total: u64) -> u8 {
    debug_assert!(total > 0);
    ((used as u128 * 100) / total as u128) as u8
}

/// The maximum mount percentage as a scalar reading.
fn worst_of(mounts: &[DiskMountReading]) -> UtilizationReading {
    match mounts.iter().map(|m| m.percent_used).max() {
        Some(worst) => UtilizationReading::of(f64::from(worst)),
        None => {
            debug!("no eligible mounts found");
            UtilizationReading::unavailable()
        },
    }
}
