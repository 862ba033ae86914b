//! # Storage Layer
//!
//! The comparison list lives in memory and is mirrored to durable storage
//! after every mutation. [`DataStore`] abstracts the backend:
//!
//! - [`fs::FileStore`]: production storage, a single pretty-printed JSON
//!   array in `comparisons.json` (the same shape as the export format).
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! Mutations are infallible: they update the in-memory list, which stays
//! authoritative for the session. `persist` is a separate call so the
//! command layer can downgrade a write failure to a warning instead of
//! losing the mutation.

use crate::error::Result;
use crate::model::Comparison;

pub mod fs;
pub mod memory;

/// Abstract interface for the comparison list and its persistence.
pub trait DataStore {
    /// The current list, in insertion order.
    fn comparisons(&self) -> &[Comparison];

    /// Append a comparison to the end of the list.
    fn append(&mut self, comparison: Comparison);

    /// Remove the comparison with the given id. Returns `false` (and
    /// leaves the list untouched) when no such id exists.
    fn remove(&mut self, id: i64) -> bool;

    /// Drop all comparisons.
    fn clear(&mut self);

    /// Replace the whole list, e.g. after a successful import.
    fn replace(&mut self, comparisons: Vec<Comparison>);

    /// Mirror the in-memory list to durable storage.
    fn persist(&mut self) -> Result<()>;
}
