//! Storage models

use serde::{Deserialize, Serialize};

/// HDD / SD card information (`HddInfo`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HddInfo {
    pub id: u32,
    /// Capacity in MB
    pub capacity: u64,
    /// Free space in MB
    pub size: u64,
    /// 1 = formatted
    pub format: u8,
    /// 1 = mounted
    pub mount: u8,
}

impl HddInfo {
    pub fn is_formatted(&self) -> bool {
        self.format == 1
    }

    pub fn is_mounted(&self) -> bool {
        self.mount == 1
    }
}
