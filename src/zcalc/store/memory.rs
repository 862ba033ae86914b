use super::DataStore;
use crate::error::Result;
use crate::model::Comparison;

/// In-memory store for tests. Never persists.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Comparison>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
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
        Ok(())
    }
}
