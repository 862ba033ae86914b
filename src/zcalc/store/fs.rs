use super::DataStore;
use crate::error::{CalcError, Result};
use crate::model::Comparison;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILENAME: &str = "comparisons.json";

/// File-backed comparison store: one JSON array in `comparisons.json`
/// under the given directory.
pub struct FileStore {
    data_dir: PathBuf,
    items: Vec<Comparison>,
}

impl FileStore {
    /// Load the store from `data_dir`. A missing file yields an empty
    /// list; an unreadable or malformed file is an error so the caller
    /// can warn and fall back to [`FileStore::empty`].
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let data_file = data_dir.join(DATA_FILENAME);

        let items = if data_file.exists() {
            let content = fs::read_to_string(&data_file).map_err(CalcError::Io)?;
            serde_json::from_str(&content).map_err(CalcError::Serialization)?
        } else {
            Vec::new()
        };

        Ok(Self { data_dir, items })
    }

    /// An empty store that will write to `data_dir`. Used as the fallback
    /// when loading fails.
    pub fn empty<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            items: Vec::new(),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }
}

impl DataStore for FileStore {
    fn comparisons(&self) -> &[Comparison] {
        &self.items
    }

    fn append(&mut self, comparison: Comparison) {
        self.items.push(comparison);
    }

    fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        self.items.len() != before
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn replace(&mut self, comparisons: Vec<Comparison>) {
        self.items = comparisons;
    }

    fn persist(&mut self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(CalcError::Io)?;
        }
        let content = serde_json::to_string_pretty(&self.items).map_err(CalcError::Serialization)?;
        fs::write(self.data_file(), content).map_err(CalcError::Io)?;
        Ok(())
    }
}
