use crate::commands::{persist_or_warn, CmdMessage, CmdResult};
use crate::error::{CalcError, Result};
use crate::model::Comparison;
use crate::store::DataStore;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Numeric snapshot fields that must hold numbers at rest. Anything else
/// found on import is coerced to 0 (1 for `vdevs`, handled separately).
const NUMERIC_FIELDS: [&str; 5] = [
    "unitPrice",
    "rawStorage",
    "usableStorage",
    "totalCost",
    "costPerGB",
];

/// String-ish fields that are stringified when a file carries them with
/// some other JSON type, so a validated file is never rejected later by
/// the typed model.
const STRING_FIELDS: [&str; 3] = ["driveModel", "driveType", "poolType"];

/// Replace the comparison list with the contents of a user-supplied file.
/// All-or-nothing: any validation failure leaves the store untouched.
pub fn run<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(CalcError::Io)?;
    // Tolerate a leading BOM and surrounding whitespace.
    let content = raw.trim_start_matches('\u{feff}').trim();

    let parsed: Value = serde_json::from_str(content).map_err(|e| {
        CalcError::Import(format!(
            "Could not parse {}: {}. Check the file format and try again.",
            path.display(),
            e
        ))
    })?;

    let items = match parsed {
        Value::Array(items) => items,
        _ => {
            return Err(CalcError::Import(
                "Invalid file format: expected a JSON array of comparisons".to_string(),
            ))
        }
    };

    if !items.iter().all(is_comparison_shaped) {
        return Err(CalcError::Import(
            "Invalid file format: the file does not contain valid comparison data".to_string(),
        ));
    }

    let sanitized: Vec<Value> = items.into_iter().map(sanitize).collect();
    let comparisons: Vec<Comparison> =
        serde_json::from_value(Value::Array(sanitized)).map_err(CalcError::Serialization)?;

    let count = comparisons.len();
    store.replace(comparisons);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} comparison{}",
        count,
        if count == 1 { "" } else { "s" }
    )));
    persist_or_warn(store, &mut result);
    Ok(result.with_comparisons(store.comparisons().to_vec()))
}

/// Minimum shape check: a non-null object carrying both `id` and
/// `config` keys, whatever their values.
fn is_comparison_shaped(item: &Value) -> bool {
    match item.as_object() {
        Some(map) => map.contains_key("id") && map.contains_key("config"),
        None => false,
    }
}

/// Coerce a validated element into the typed model's shape. Unknown
/// fields pass through unchanged.
fn sanitize(item: Value) -> Value {
    let mut map = match item {
        Value::Object(map) => map,
        // Already ruled out by validation.
        other => return other,
    };

    for key in NUMERIC_FIELDS {
        if let Some(v) = map.get(key) {
            if !v.is_number() {
                map.insert(key.to_string(), Value::from(0.0));
            }
        }
    }

    // vdevs must fit the u32 model. Integral floats (2.0) are kept as
    // their integer value; anything else defaults to 1.
    if let Some(v) = map.get("vdevs") {
        match vdevs_as_u32(v) {
            Some(n) => {
                map.insert("vdevs".to_string(), Value::from(n));
            }
            None => {
                map.insert("vdevs".to_string(), Value::from(1));
            }
        }
    }

    // Ids are integer timestamps; non-integer values become 0.
    if map.get("id").and_then(Value::as_i64).is_none() {
        map.insert("id".to_string(), Value::from(0));
    }

    // `config` is a required String, so even null becomes text ("null",
    // as the original's table renders it). The optional string fields
    // keep null, which maps to None.
    if let Some(v) = map.get("config") {
        if !v.is_string() {
            let text = v.to_string();
            map.insert("config".to_string(), Value::String(text));
        }
    }
    for key in STRING_FIELDS {
        stringify_in_place(&mut map, key);
    }

    Value::Object(map)
}

fn vdevs_as_u32(v: &Value) -> Option<u32> {
    if let Some(n) = v.as_u64() {
        return u32::try_from(n).ok();
    }
    match v.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX) => Some(f as u32),
        _ => None,
    }
}

fn stringify_in_place(map: &mut Map<String, Value>, key: &str) {
    if let Some(v) = map.get(key) {
        if !v.is_string() && !v.is_null() {
            let text = v.to_string();
            map.insert(key.to_string(), Value::String(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let existing: Vec<Comparison> =
            serde_json::from_str(r#"[{"id": 42, "config": "existing"}]"#).unwrap();
        store.replace(existing);
        store
    }

    #[test]
    fn imports_and_replaces_whole_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "in.json",
            r#"[
                {"id": 1, "config": "4TB × 8 drives", "totalCost": 1000},
                {"id": 2, "config": "2TB × 4 drives"}
            ]"#,
        );

        let mut store = seeded_store();
        let result = run(&mut store, &path).unwrap();
        assert_eq!(store.comparisons().len(), 2);
        assert_eq!(store.comparisons()[0].total_cost, 1000.0);
        assert!(result.messages[0].content.contains("Imported 2 comparisons"));
    }

    #[test]
    fn rejects_top_level_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "obj.json", r#"{"id": 1, "config": "x"}"#);

        let mut store = seeded_store();
        let err = run(&mut store, &path).unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
        assert_eq!(store.comparisons().len(), 1);
        assert_eq!(store.comparisons()[0].id, 42);
    }

    #[test]
    fn rejects_element_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "bad.json",
            r#"[{"id": 1, "config": "ok"}, {"id": 2}]"#,
        );

        let mut store = seeded_store();
        let err = run(&mut store, &path).unwrap_err();
        assert!(err
            .to_string()
            .contains("does not contain valid comparison data"));
        // All-or-nothing: store untouched.
        assert_eq!(store.comparisons()[0].id, 42);
    }

    #[test]
    fn rejects_null_and_scalar_elements() {
        let dir = tempfile::tempdir().unwrap();
        for content in [r#"[null]"#, r#"[7]"#, r#"["text"]"#] {
            let path = write_file(&dir, "bad.json", content);
            let mut store = seeded_store();
            assert!(run(&mut store, &path).is_err());
            assert_eq!(store.comparisons().len(), 1);
        }
    }

    #[test]
    fn rejects_non_json_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "junk.txt", "this is not json");

        let mut store = seeded_store();
        let err = run(&mut store, &path).unwrap_err();
        assert!(err.to_string().contains("Could not parse"));
        assert_eq!(store.comparisons().len(), 1);
    }

    #[test]
    fn sanitizes_non_numeric_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "dirty.json",
            r#"[{
                "id": 1,
                "config": "c",
                "vdevs": "abc",
                "totalCost": "1000",
                "unitPrice": null,
                "rawStorage": 32,
                "costPerGB": {"nested": true}
            }]"#,
        );

        let mut store = InMemoryStore::new();
        run(&mut store, &path).unwrap();
        let c = &store.comparisons()[0];
        assert_eq!(c.vdevs, 1);
        assert_eq!(c.total_cost, 0.0);
        assert_eq!(c.unit_price, 0.0);
        assert_eq!(c.raw_storage, 32.0);
        assert_eq!(c.cost_per_gb, 0.0);
    }

    #[test]
    fn missing_numeric_fields_default_to_safe_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "min.json", r#"[{"id": 1, "config": "c"}]"#);

        let mut store = InMemoryStore::new();
        run(&mut store, &path).unwrap();
        let c = &store.comparisons()[0];
        assert_eq!(c.vdevs, 1);
        assert_eq!(c.usable_storage, 0.0);
        assert_eq!(c.total_cost, 0.0);
    }

    #[test]
    fn tolerates_bom_and_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "bom.json",
            "\u{feff}\n  [{\"id\": 1, \"config\": \"c\"}]  \n",
        );

        let mut store = InMemoryStore::new();
        run(&mut store, &path).unwrap();
        assert_eq!(store.comparisons().len(), 1);
    }

    #[test]
    fn null_config_imports_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "null.json", r#"[{"id": 1, "config": null}]"#);

        let mut store = InMemoryStore::new();
        let result = run(&mut store, &path).unwrap();
        assert_eq!(store.comparisons().len(), 1);
        assert_eq!(store.comparisons()[0].config, "null");
        assert!(result.messages[0].content.contains("Imported 1 comparison"));
    }

    #[test]
    fn null_optional_string_fields_stay_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "nulls.json",
            r#"[{"id": 1, "config": "c", "driveModel": null, "poolType": null}]"#,
        );

        let mut store = InMemoryStore::new();
        run(&mut store, &path).unwrap();
        assert!(store.comparisons()[0].drive_model.is_none());
        assert!(store.comparisons()[0].pool_type.is_none());
    }

    #[test]
    fn integral_float_vdevs_survives_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "floats.json",
            r#"[
                {"id": 1, "config": "a", "vdevs": 2.0},
                {"id": 2, "config": "b", "vdevs": 2.5},
                {"id": 3, "config": "c", "vdevs": -3.0}
            ]"#,
        );

        let mut store = InMemoryStore::new();
        run(&mut store, &path).unwrap();
        assert_eq!(store.comparisons()[0].vdevs, 2);
        assert_eq!(store.comparisons()[1].vdevs, 1);
        assert_eq!(store.comparisons()[2].vdevs, 1);
    }

    #[test]
    fn non_string_config_is_stringified_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "num.json", r#"[{"id": 1, "config": 12}]"#);

        let mut store = InMemoryStore::new();
        run(&mut store, &path).unwrap();
        assert_eq!(store.comparisons()[0].config, "12");
    }

    #[test]
    fn empty_array_clears_the_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.json", "[]");

        let mut store = seeded_store();
        run(&mut store, &path).unwrap();
        assert!(store.comparisons().is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error_not_an_import_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CalcError::Io(_)));
    }
}
