//! System models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Device information (`DevInfo`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceInformation {
    #[serde(rename = "B485")]
    pub b485: u8,
    #[serde(rename = "IOInputNum")]
    pub io_input_num: u32,
    #[serde(rename = "IOOutputNum")]
    pub io_output_num: u32,
    pub audio_num: u32,
    pub build_day: String,
    pub cfg_ver: String,
    pub channel_num: u32,
    pub detail: String,
    pub disk_num: u32,
    pub firm_ver: String,
    pub framework_ver: u32,
    pub hard_ver: String,
    pub model: String,
    pub name: String,
    pub pak_suffix: String,
    pub serial: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub wifi: u8,
}

/// Device name (`DevName`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceName {
    pub name: String,
}

impl Default for DeviceName {
    fn default() -> Self {
        Self {
            name: "Camera1".to_string(),
        }
    }
}

/// Performance counters (`Performance`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceInformation {
    /// kbps
    pub codec_rate: u32,
    /// percent
    pub cpu_used: u32,
    /// kbps
    pub net_throughput: u32,
}

/// Clock settings (`Time`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeInformation {
    pub year: i32,
    pub mon: u32,
    pub day: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
    /// `DD/MM/YYYY`, `MM/DD/YYYY` or `YYYY/MM/DD`
    pub time_fmt: String,
    /// 0 = 24h, 1 = 12h
    pub hour_fmt: u8,
    /// Seconds west of UTC
    pub time_zone: i32,
}

impl TimeInformation {
    /// Device-local wall clock; `None` if the fields are out of range
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.mon, self.day)?
            .and_hms_opt(self.hour, self.min, self.sec)
    }
}

/// Daylight saving settings (`Dst`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DstInformation {
    pub enable: u8,
    pub offset: i32,
    pub start_mon: u32,
    pub start_week: u32,
    pub start_weekday: u32,
    pub start_hour: u32,
    pub start_min: u32,
    pub start_sec: u32,
    pub end_mon: u32,
    pub end_week: u32,
    pub end_weekday: u32,
    pub end_hour: u32,
    pub end_min: u32,
    pub end_sec: u32,
}

/// Video norm (`norm`): PAL / NTSC
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceNorm {
    pub norm: String,
}

/// Time, DST and norm in one view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSystemInformation {
    pub time: TimeInformation,
    pub dst: Option<DstInformation>,
    pub norm: DeviceNorm,
}
