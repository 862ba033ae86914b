use crate::commands::{persist_or_warn, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Empty the comparison list and persist the empty state.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.comparisons().len();
    store.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} comparison{}",
        removed,
        if removed == 1 { "" } else { "s" }
    )));
    persist_or_warn(store, &mut result);
    Ok(result)
}
