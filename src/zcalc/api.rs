//! # API Facade
//!
//! Thin entry point over the command layer, generic over the storage
//! backend so UI clients and tests pick their own:
//!
//! - Production: `CalcApi<FileStore>`
//! - Testing: `CalcApi<InMemoryStore>`
//!
//! The facade dispatches and returns structured `Result<CmdResult>`
//! values; it does no business logic, no I/O, and no formatting. Those
//! belong to `commands/*.rs` and the CLI layer respectively.

use crate::calc::{self, Calculation};
use crate::commands;
use crate::error::Result;
use crate::model::{Comparison, Configuration};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct CalcApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> CalcApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    /// Run the capacity/cost model over a configuration. Pure; does not
    /// touch the store.
    pub fn calculate(&self, config: &Configuration) -> Calculation {
        calc::calculate(config)
    }

    pub fn add_comparison(&mut self, config: &Configuration) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, config)
    }

    pub fn list_comparisons(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove_comparison(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn clear_comparisons(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn export_comparisons(&self, path: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn import_comparisons(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn comparisons(&self) -> &[Comparison] {
        self.store.comparisons()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
