use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Physical drive interface. Unknown values are carried through verbatim
/// rather than rejected, matching the permissive interchange format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveType {
    Sata,
    NvmeU2,
    NvmeU3,
    NvmeM2,
    Other(String),
}

impl DriveType {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "sata" => DriveType::Sata,
            "nvme-u2" => DriveType::NvmeU2,
            "nvme-u3" => DriveType::NvmeU3,
            "nvme-m2" => DriveType::NvmeM2,
            _ => DriveType::Other(s.to_string()),
        }
    }

    /// Human-readable name used in comparison snapshots.
    pub fn display_name(&self) -> &str {
        match self {
            DriveType::Sata => "SATA",
            DriveType::NvmeU2 => "NVME U.2",
            DriveType::NvmeU3 => "NVME U.3",
            DriveType::NvmeM2 => "NVME M.2",
            DriveType::Other(s) => s,
        }
    }
}

impl Default for DriveType {
    fn default() -> Self {
        DriveType::Sata
    }
}

/// Pool redundancy scheme. DRAID variants share the capacity formulas of
/// the RAIDZ level with the same parity count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolType {
    Mirror,
    Raidz1,
    Raidz2,
    Raidz3,
    Draid1,
    Draid2,
    Draid3,
    Other(String),
}

impl PoolType {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "mirror" => PoolType::Mirror,
            "raidz1" => PoolType::Raidz1,
            "raidz2" => PoolType::Raidz2,
            "raidz3" => PoolType::Raidz3,
            "draid1" => PoolType::Draid1,
            "draid2" => PoolType::Draid2,
            "draid3" => PoolType::Draid3,
            _ => PoolType::Other(s.to_string()),
        }
    }

    /// Drives' worth of capacity lost to redundancy per vdev.
    /// `None` for mirrors and unrecognized pool types, where the capacity
    /// model counts a single drive per vdev instead.
    pub fn parity(&self) -> Option<u32> {
        match self {
            PoolType::Raidz1 | PoolType::Draid1 => Some(1),
            PoolType::Raidz2 | PoolType::Draid2 => Some(2),
            PoolType::Raidz3 | PoolType::Draid3 => Some(3),
            PoolType::Mirror | PoolType::Other(_) => None,
        }
    }

    /// Human-readable name used in comparison snapshots.
    pub fn display_name(&self) -> &str {
        match self {
            PoolType::Mirror => "Mirrored",
            PoolType::Raidz1 => "RAIDZ",
            PoolType::Raidz2 => "RAIDZ2",
            PoolType::Raidz3 => "RAIDZ3",
            PoolType::Draid1 => "DRAID1",
            PoolType::Draid2 => "DRAID2",
            PoolType::Draid3 => "DRAID3",
            PoolType::Other(s) => s,
        }
    }
}

impl Default for PoolType {
    fn default() -> Self {
        PoolType::Mirror
    }
}

/// One set of calculator inputs. Ephemeral; only the derived
/// [`Comparison`] snapshot is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Capacity per drive in terabytes.
    pub drive_size: f64,
    /// Cost per drive.
    pub drive_cost: f64,
    pub drive_model: Option<String>,
    pub drive_type: DriveType,
    pub total_drives: u32,
    /// Number of vdevs. Callers must keep this >= 1; the capacity model
    /// divides by it.
    pub num_vdevs: u32,
    pub pool_type: PoolType,
    /// Fixed cost added once regardless of drive count.
    pub chassis_cost: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            drive_size: 0.0,
            drive_cost: 0.0,
            drive_model: None,
            drive_type: DriveType::default(),
            total_drives: 0,
            num_vdevs: 1,
            pool_type: PoolType::default(),
            chassis_cost: 0.0,
        }
    }
}

impl Configuration {
    /// The summary string stored in a comparison, e.g. "4TB × 8 drives".
    pub fn summary(&self) -> String {
        format!("{}TB × {} drives", self.drive_size, self.total_drives)
    }
}

fn default_vdevs() -> u32 {
    1
}

/// A saved calculator run: inputs plus derived metrics, snapshotted at
/// creation time.
///
/// Field names match the interchange format exactly (a JSON array of
/// these objects is both the on-disk store and the export file). Only
/// `id` and `config` are required on import; `extra` carries any unknown
/// fields through so re-exporting an imported file preserves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Millisecond timestamp at creation.
    pub id: i64,
    pub config: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_type: Option<String>,
    #[serde(default = "default_vdevs")]
    pub vdevs: u32,
    #[serde(default)]
    pub raw_storage: f64,
    #[serde(default)]
    pub usable_storage: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(rename = "costPerGB", default)]
    pub cost_per_gb: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
