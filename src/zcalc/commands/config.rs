use crate::commands::{CmdMessage, CmdResult};
use crate::config::CalcConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetCurrency(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            let config = CalcConfig::load(config_dir)?;
            result.config = Some(config);
        }
        ConfigAction::SetCurrency(symbol) => {
            let mut config = CalcConfig::load(config_dir)?;
            config.currency = symbol;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "Currency set to {}",
                config.currency
            )));
            result.config = Some(config);
        }
    }

    Ok(result)
}
