use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CalcError, Result};
use crate::store::DataStore;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Write the full comparison list as a pretty-printed JSON array. The
/// default filename carries the current date, e.g.
/// `zfs-comparisons-2026-08-29.json`.
pub fn run<S: DataStore>(store: &S, path: Option<PathBuf>) -> Result<CmdResult> {
    let path = path.unwrap_or_else(default_filename);

    let content =
        serde_json::to_string_pretty(store.comparisons()).map_err(CalcError::Serialization)?;
    fs::write(&path, content).map_err(CalcError::Io)?;

    let mut result = CmdResult::default();
    let count = store.comparisons().len();
    result.add_message(CmdMessage::success(format!(
        "Exported {} comparison{} to {}",
        count,
        if count == 1 { "" } else { "s" },
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

fn default_filename() -> PathBuf {
    PathBuf::from(format!("zfs-comparisons-{}.json", Utc::now().format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, import};
    use crate::model::{Configuration, PoolType};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn writes_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let mut store = InMemoryStore::new();
        let config = Configuration {
            drive_size: 4.0,
            total_drives: 8,
            num_vdevs: 2,
            pool_type: PoolType::Raidz1,
            ..Default::default()
        };
        add::run(&mut store, &config).unwrap();

        run(&store, Some(out.clone())).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with('['));
        // Pretty print, not a single line
        assert!(content.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["config"], "4TB × 8 drives");
    }

    #[test]
    fn empty_store_exports_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.json");
        let store = InMemoryStore::new();
        run(&store, Some(out.clone())).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap().trim(), "[]");
    }

    #[test]
    fn default_filename_is_dated() {
        let name = default_filename();
        let name = name.to_string_lossy();
        assert!(name.starts_with("zfs-comparisons-"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn export_import_export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();

        // An externally produced file with junk numerics and an extra field.
        let source = dir.path().join("source.json");
        fs::write(
            &source,
            r#"[{"id": 5, "config": "2TB × 4 drives", "totalCost": "1000", "vdevs": "abc", "notes": "keep me"}]"#,
        )
        .unwrap();

        let mut store = InMemoryStore::new();
        import::run(&mut store, &source).unwrap();
        let first = dir.path().join("first.json");
        run(&store, Some(first.clone())).unwrap();

        let mut store2 = InMemoryStore::new();
        import::run(&mut store2, &first).unwrap();
        let second = dir.path().join("second.json");
        run(&store2, Some(second.clone())).unwrap();

        let a: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&first).unwrap()).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&second).unwrap()).unwrap();
        assert_eq!(a, b);
        // Sanitized form of the original input
        assert_eq!(a[0]["totalCost"], 0.0);
        assert_eq!(a[0]["vdevs"], 1);
        assert_eq!(a[0]["notes"], "keep me");
    }
}
