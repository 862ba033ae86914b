use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;
use zcalc::api::{CalcApi, CmdMessage, ConfigAction, MessageLevel};
use zcalc::calc::{Calculation, CostBreakdown, StorageBreakdown};
use zcalc::config::CalcConfig;
use zcalc::error::{CalcError, Result};
use zcalc::model::{Comparison, Configuration, DriveType, PoolType};
use zcalc::store::fs::FileStore;

mod args;
use args::{Cli, Commands, PoolArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CalcApi<FileStore>,
    currency: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Calc { pool }) => handle_calc(&ctx, &pool),
        Some(Commands::Add { pool }) => handle_add(&mut ctx, &pool),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    // ZCALC_HOME overrides the platform data dir; used by tests.
    if let Some(dir) = std::env::var_os("ZCALC_HOME") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "zcalc", "zcalc")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CalcError::Store("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = CalcConfig::load(&dir).unwrap_or_default();

    // A corrupt or unreadable data file resets the list rather than
    // blocking every command.
    let store = match FileStore::open(&dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: could not read saved comparisons, starting empty: {}", e)
                    .yellow()
            );
            FileStore::empty(&dir)
        }
    };

    Ok(AppContext {
        api: CalcApi::new(store, dir),
        currency: config.currency,
    })
}

fn to_configuration(pool: &PoolArgs) -> Configuration {
    Configuration {
        drive_size: pool.size,
        drive_cost: pool.cost,
        drive_model: pool.model.clone(),
        drive_type: DriveType::parse(&pool.drive_type),
        total_drives: pool.drives,
        num_vdevs: pool.vdevs,
        pool_type: PoolType::parse(&pool.pool),
        chassis_cost: pool.chassis,
    }
}

fn handle_calc(ctx: &AppContext, pool: &PoolArgs) -> Result<()> {
    let config = to_configuration(pool);
    match ctx.api.calculate(&config) {
        Calculation::Valid { storage, cost } => {
            print_breakdown(&ctx.currency, &config, &storage, &cost)
        }
        Calculation::Invalid { cost } => print_invalid(&ctx.currency, &cost),
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, pool: &PoolArgs) -> Result<()> {
    let config = to_configuration(pool);
    match ctx.api.calculate(&config) {
        Calculation::Valid { storage, cost } => {
            print_breakdown(&ctx.currency, &config, &storage, &cost)
        }
        Calculation::Invalid { cost } => print_invalid(&ctx.currency, &cost),
    }

    let result = ctx.api.add_comparison(&config)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_comparisons()?;
    print_comparisons(&ctx.currency, &result.comparisons);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.remove_comparison(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_comparisons()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_comparisons(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_comparisons(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("currency"), None) => ConfigAction::ShowKey("currency".to_string()),
        (Some("currency"), Some(v)) => ConfigAction::SetCurrency(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency = {}", config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn print_invalid(currency: &str, cost: &CostBreakdown) {
    println!(
        "{}",
        "Please enter valid drive size and number of drives".yellow()
    );
    println!("Chassis Cost:   {}{:.2}", currency, cost.chassis_cost);
    println!("Total Cost:     {}{:.2}", currency, cost.total_cost);
}

fn print_breakdown(
    currency: &str,
    config: &Configuration,
    storage: &StorageBreakdown,
    cost: &CostBreakdown,
) {
    println!("{}", config.summary().bold());
    println!("Raw Storage:    {:.2} TB", storage.raw_storage);
    println!("Usable (ZFS):   {:.2} TB", storage.zfs_usable_storage);
    println!("Drive Cost:     {}{:.2}", currency, cost.drive_cost_total);
    println!("Chassis Cost:   {}{:.2}", currency, cost.chassis_cost);
    println!("Total Cost:     {}{:.2}", currency, cost.total_cost);
    println!("Cost per GB:    {}{:.4}", currency, cost.cost_per_gb);
    println!(
        "{}",
        format!(
            "{} VDEVs, {} drives each. {}",
            config.num_vdevs, storage.drives_per_vdev, storage.redundancy_info
        )
        .dimmed()
    );

    if storage.zfs_usable_storage < 0.0 {
        eprintln!(
            "{}",
            "Warning: usable capacity is negative; this layout has more parity than drives per VDEV"
                .yellow()
        );
    }
}

const COLUMN_GAP: usize = 2;

fn print_comparisons(currency: &str, comparisons: &[Comparison]) {
    if comparisons.is_empty() {
        println!("No comparisons saved.");
        return;
    }

    let header = [
        "ID", "Config", "Model", "Type", "Pool", "VDEVs", "Raw", "Usable", "Total", "Per GB",
        "Added",
    ];
    let rows: Vec<Vec<String>> = comparisons
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.config.clone(),
                c.drive_model.clone().unwrap_or_default(),
                c.drive_type.clone().unwrap_or_default(),
                c.pool_type.clone().unwrap_or_default(),
                c.vdevs.to_string(),
                format!("{:.2} TB", c.raw_storage),
                format!("{:.2} TB", c.usable_storage),
                format!("{}{:.2}", currency, c.total_cost),
                format!("{}{:.4}", currency, c.cost_per_gb),
                format_added(c.id),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header_line: String = header
        .iter()
        .enumerate()
        .map(|(i, h)| pad_cell(h, widths[i]))
        .collect();
    println!("{}", header_line.dimmed());

    for row in &rows {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad_cell(cell, widths[i]))
            .collect();
        println!("{}", line.trim_end());
    }
}

fn pad_cell(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width()) + COLUMN_GAP;
    format!("{}{}", text, " ".repeat(padding))
}

/// Relative age of a comparison, derived from its timestamp id.
fn format_added(id: i64) -> String {
    if id <= 0 {
        return "-".to_string();
    }
    let now = chrono::Utc::now().timestamp_millis();
    let elapsed_ms = now.saturating_sub(id).max(0) as u64;
    timeago::Formatter::new().convert(Duration::from_millis(elapsed_ms))
}
