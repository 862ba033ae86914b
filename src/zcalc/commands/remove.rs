use crate::commands::{persist_or_warn, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Remove a comparison by id. Removing an id that is not present is a
/// no-op, not an error.
pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.remove(id) {
        result.add_message(CmdMessage::success(format!("Removed comparison {}", id)));
        persist_or_warn(store, &mut result);
    } else {
        result.add_message(CmdMessage::info(format!("No comparison with id {}", id)));
    }

    Ok(result.with_comparisons(store.comparisons().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Configuration;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_matching_comparison() {
        let mut store = InMemoryStore::new();
        let config = Configuration {
            drive_size: 4.0,
            total_drives: 8,
            ..Default::default()
        };
        add::run(&mut store, &config).unwrap();
        add::run(&mut store, &config).unwrap();
        let id = store.comparisons()[0].id;

        let result = run(&mut store, id).unwrap();
        assert_eq!(store.comparisons().len(), 1);
        assert!(store.comparisons().iter().all(|c| c.id != id));
        assert_eq!(result.comparisons.len(), 1);
    }

    #[test]
    fn removing_absent_id_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();
        let config = Configuration {
            drive_size: 4.0,
            total_drives: 8,
            ..Default::default()
        };
        add::run(&mut store, &config).unwrap();
        let before = store.comparisons().to_vec();

        run(&mut store, 123456).unwrap();
        assert_eq!(store.comparisons(), &before[..]);
    }
}
