//! Storage quota usage.

use serde::{Deserialize, Serialize};

use crate::config::storage as defaults;
use crate::utils::format::{format_quantity, scale_bytes};

/// Used/total pair expressed in a display unit (e.g. `7.39` of `15` `GB`).
///
/// Display-only: `used` is not required to be at most `total`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageUsage {
    pub used: f64,
    pub total: f64,
    pub unit: String,
}

impl StorageUsage {
    pub fn new(used: f64, total: f64, unit: impl Into<String>) -> Self {
        Self {
            used,
            total,
            unit: unit.into(),
        }
    }

    /// Build from raw byte counts, picking the unit that fits `total`.
    pub fn from_bytes(used: u64, total: u64) -> Self {
        let (total_scaled, unit) = scale_bytes(total, total);
        let (used_scaled, _) = scale_bytes(used, total);
        Self::new(used_scaled, total_scaled, unit)
    }

    /// `used / total`, the value fed to the usage bar. Not finite when
    /// `total` is zero.
    pub fn ratio(&self) -> f64 {
        self.used / self.total
    }

    /// Human-readable summary, e.g. `7.39GB of 15GB`.
    pub fn details(&self) -> String {
        format!(
            "{}{unit} of {}{unit}",
            format_quantity(self.used),
            format_quantity(self.total),
            unit = self.unit
        )
    }
}

impl Default for StorageUsage {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_USED, defaults::DEFAULT_TOTAL, defaults::DEFAULT_UNIT)
    }
}

/// Wire format of the usage endpoint.
///
/// Servers may report either display units or raw byte counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageUsageResponse {
    Units(StorageUsage),
    Bytes { used_bytes: u64, total_bytes: u64 },
}

impl From<StorageUsageResponse> for StorageUsage {
    fn from(response: StorageUsageResponse) -> Self {
        match response {
            StorageUsageResponse::Units(usage) => usage,
            StorageUsageResponse::Bytes {
                used_bytes,
                total_bytes,
            } => Self::from_bytes(used_bytes, total_bytes),
        }
    }
}
