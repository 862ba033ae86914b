//! Business logic for each calculator operation. Commands operate on a
//! [`DataStore`], return structured [`CmdResult`]s, and never touch
//! stdout/stderr; rendering belongs to the CLI layer.

use crate::config::CalcConfig;
use crate::model::Comparison;
use crate::store::DataStore;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod remove;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub comparisons: Vec<Comparison>,
    pub export_path: Option<PathBuf>,
    pub config: Option<CalcConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_comparisons(mut self, comparisons: Vec<Comparison>) -> Self {
        self.comparisons = comparisons;
        self
    }
}

/// Mirror the store to disk, downgrading a write failure to a warning.
/// The in-memory list stays authoritative for the session either way.
pub(crate) fn persist_or_warn<S: DataStore>(store: &mut S, result: &mut CmdResult) {
    if let Err(e) = store.persist() {
        result.add_message(CmdMessage::warning(format!(
            "Could not save comparisons: {}",
            e
        )));
    }
}
