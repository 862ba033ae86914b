use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// List saved comparisons in insertion order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_comparisons(store.comparisons().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Configuration;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn preserves_insertion_order() {
        let mut store = InMemoryStore::new();
        for drives in [4, 8, 12] {
            let config = Configuration {
                drive_size: 4.0,
                total_drives: drives,
                ..Default::default()
            };
            add::run(&mut store, &config).unwrap();
        }

        let result = run(&store).unwrap();
        let configs: Vec<&str> = result.comparisons.iter().map(|c| c.config.as_str()).collect();
        assert_eq!(
            configs,
            vec!["4TB × 4 drives", "4TB × 8 drives", "4TB × 12 drives"]
        );
    }
}
