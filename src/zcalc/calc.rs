//! The capacity/cost model: pure functions from a [`Configuration`] to
//! derived storage and cost figures. No I/O, no store access.
//!
//! Capacity is tracked in terabytes throughout; cost-per-unit is
//! normalized to a gigabyte-equivalent (× 1024) for readability.

use crate::model::{Configuration, PoolType};

/// Fraction of usable capacity left after the filesystem overhead
/// reservation. Applied unconditionally, regardless of pool type.
pub const ZFS_OVERHEAD_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageBreakdown {
    pub raw_storage: f64,
    pub drives_per_vdev: u32,
    /// May go negative when drives_per_vdev does not cover the parity
    /// count; propagated unclamped so callers can warn about it.
    pub usable_storage_per_vdev: f64,
    pub total_usable_storage: f64,
    pub zfs_usable_storage: f64,
    pub redundancy_info: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub drive_cost_total: f64,
    pub chassis_cost: f64,
    pub total_cost: f64,
    pub cost_per_gb: f64,
}

/// A full calculator run. `Invalid` is the guarded short-circuit for
/// non-positive drive size or count: everything zeroed except the fixed
/// chassis cost, which still shows up in the totals.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    Valid {
        storage: StorageBreakdown,
        cost: CostBreakdown,
    },
    Invalid {
        cost: CostBreakdown,
    },
}

/// Derive capacity figures for a pool layout.
///
/// Precondition: `num_vdevs >= 1`. The division is not guarded here;
/// callers (the CLI boundary) are responsible for defaulting vdevs to
/// at least 1.
pub fn compute_storage(
    drive_size: f64,
    total_drives: u32,
    num_vdevs: u32,
    pool_type: &PoolType,
) -> StorageBreakdown {
    let drives_per_vdev = total_drives / num_vdevs;
    let raw_storage = f64::from(total_drives) * drive_size;

    let (usable_storage_per_vdev, redundancy_info) = match pool_type.parity() {
        // Parity schemes: k drives' worth of capacity lost per vdev.
        // drives_per_vdev - k may be negative and is kept that way.
        Some(parity) => {
            let data_drives = i64::from(drives_per_vdev) - i64::from(parity);
            let usable = data_drives as f64 * drive_size;
            // Scheme label, not the snapshot display name ("RAIDZ1", not "RAIDZ").
            let (label, kind) = match pool_type {
                PoolType::Raidz1 => ("RAIDZ1", "parity"),
                PoolType::Raidz2 => ("RAIDZ2", "parity"),
                PoolType::Raidz3 => ("RAIDZ3", "parity"),
                PoolType::Draid1 => ("DRAID1", "distributed parity"),
                PoolType::Draid2 => ("DRAID2", "distributed parity"),
                _ => ("DRAID3", "distributed parity"),
            };
            let info = format!(
                "{}: {} drives usable per VDEV ({} {})",
                label, data_drives, parity, kind
            );
            (usable, info)
        }
        None => match pool_type {
            // A mirror contributes exactly one drive's capacity per vdev
            // no matter how wide it is.
            PoolType::Mirror => (
                drive_size,
                format!(
                    "Mirror: 1 drive per VDEV ({} drives per VDEV for redundancy)",
                    drives_per_vdev
                ),
            ),
            // Unrecognized pool types fall back to a single drive's
            // capacity rather than erroring.
            _ => (drive_size, "Unknown pool type".to_string()),
        },
    };

    let total_usable_storage = usable_storage_per_vdev * f64::from(num_vdevs);
    let zfs_usable_storage = total_usable_storage * ZFS_OVERHEAD_FACTOR;

    StorageBreakdown {
        raw_storage,
        drives_per_vdev,
        usable_storage_per_vdev,
        total_usable_storage,
        zfs_usable_storage,
        redundancy_info,
    }
}

/// Derive cost figures. `cost_per_gb` is zero (never NaN or infinite)
/// whenever there is no positive usable capacity to divide by.
pub fn compute_cost(
    total_drives: u32,
    drive_cost: f64,
    chassis_cost: f64,
    zfs_usable_storage: f64,
) -> CostBreakdown {
    let drive_cost_total = f64::from(total_drives) * drive_cost;
    let total_cost = drive_cost_total + chassis_cost;
    let cost_per_gb = if zfs_usable_storage > 0.0 {
        total_cost / (zfs_usable_storage * 1024.0)
    } else {
        0.0
    };

    CostBreakdown {
        drive_cost_total,
        chassis_cost,
        total_cost,
        cost_per_gb,
    }
}

/// Run the full model over a configuration, applying the invalid-input
/// guard.
pub fn calculate(config: &Configuration) -> Calculation {
    if config.drive_size <= 0.0 || config.total_drives == 0 {
        return Calculation::Invalid {
            cost: CostBreakdown {
                drive_cost_total: 0.0,
                chassis_cost: config.chassis_cost,
                total_cost: config.chassis_cost,
                cost_per_gb: 0.0,
            },
        };
    }

    let storage = compute_storage(
        config.drive_size,
        config.total_drives,
        config.num_vdevs,
        &config.pool_type,
    );
    let cost = compute_cost(
        config.total_drives,
        config.drive_cost,
        config.chassis_cost,
        storage.zfs_usable_storage,
    );

    Calculation::Valid { storage, cost }
}
