use crate::calc;
use crate::commands::{persist_or_warn, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Comparison, Configuration};
use crate::store::DataStore;
use chrono::Utc;
use serde_json::Map;

/// Snapshot the current configuration plus its derived metrics and append
/// it to the comparison list.
pub fn run<S: DataStore>(store: &mut S, config: &Configuration) -> Result<CmdResult> {
    let storage = calc::compute_storage(
        config.drive_size,
        config.total_drives,
        config.num_vdevs,
        &config.pool_type,
    );
    let cost = calc::compute_cost(
        config.total_drives,
        config.drive_cost,
        config.chassis_cost,
        storage.zfs_usable_storage,
    );

    let comparison = Comparison {
        id: next_id(store.comparisons().iter().map(|c| c.id).max()),
        config: config.summary(),
        drive_model: Some(
            config
                .drive_model
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Not specified".to_string()),
        ),
        drive_type: Some(config.drive_type.display_name().to_string()),
        unit_price: config.drive_cost,
        pool_type: Some(config.pool_type.display_name().to_string()),
        vdevs: config.num_vdevs,
        raw_storage: storage.raw_storage,
        usable_storage: storage.zfs_usable_storage,
        total_cost: cost.total_cost,
        cost_per_gb: cost.cost_per_gb,
        extra: Map::new(),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added comparison {}: {}",
        comparison.id, comparison.config
    )));

    store.append(comparison);
    persist_or_warn(store, &mut result);
    Ok(result.with_comparisons(store.comparisons().to_vec()))
}

/// Millisecond timestamp, bumped past the highest existing id so that
/// rapid successive additions stay unique even when the list (e.g. after
/// an import) is not sorted by id.
fn next_id(max_id: Option<i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match max_id {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}
