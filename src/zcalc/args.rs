use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "zcalc")]
#[command(about = "ZFS storage capacity and cost calculator", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inputs shared by `calc` and `add`.
#[derive(Args, Debug)]
pub struct PoolArgs {
    /// Capacity per drive, in terabytes
    #[arg(short, long)]
    pub size: f64,

    /// Total number of drives
    #[arg(short = 'n', long)]
    pub drives: u32,

    /// Number of vdevs (redundancy groups), at least 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub vdevs: u32,

    /// Pool layout: mirror, raidz1-3 or draid1-3
    #[arg(short, long, default_value = "mirror")]
    pub pool: String,

    /// Cost per drive
    #[arg(short, long, default_value_t = 0.0)]
    pub cost: f64,

    /// Chassis cost, added once regardless of drive count
    #[arg(long, default_value_t = 0.0)]
    pub chassis: f64,

    /// Drive model label
    #[arg(short, long)]
    pub model: Option<String>,

    /// Drive interface: sata, nvme-u2, nvme-u3 or nvme-m2
    #[arg(long = "type", default_value = "sata")]
    pub drive_type: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute capacity and cost for a configuration
    #[command(alias = "c")]
    Calc {
        #[command(flatten)]
        pool: PoolArgs,
    },

    /// Compute and save the configuration as a comparison
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        pool: PoolArgs,
    },

    /// List saved comparisons
    #[command(alias = "ls")]
    List,

    /// Remove a comparison by id
    #[command(alias = "rm")]
    Remove {
        /// Id shown in the list output
        id: i64,
    },

    /// Remove all saved comparisons
    Clear,

    /// Export comparisons to a JSON file
    Export {
        /// Output path (defaults to zfs-comparisons-<date>.json)
        path: Option<PathBuf>,
    },

    /// Import comparisons from a JSON file, replacing the current list
    Import {
        /// File to import
        path: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
