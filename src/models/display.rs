//! Display models (on-screen display overlay)

use super::Toggle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overlay anchor; sent as its display name (`"Lower Right"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsdPosition {
    UpperLeft,
    TopCenter,
    UpperRight,
    LowerLeft,
    BottomCenter,
    LowerRight,
}

impl OsdPosition {
    const ALL: [OsdPosition; 6] = [
        Self::UpperLeft,
        Self::TopCenter,
        Self::UpperRight,
        Self::LowerLeft,
        Self::BottomCenter,
        Self::LowerRight,
    ];

    /// Inverse of [`as_str`](Self::as_str)
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpperLeft => "Upper Left",
            Self::TopCenter => "Top Center",
            Self::UpperRight => "Upper Right",
            Self::LowerLeft => "Lower Left",
            Self::BottomCenter => "Bottom Center",
            Self::LowerRight => "Lower Right",
        }
    }
}

impl fmt::Display for OsdPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel name overlay (`osdChannel`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsdChannel {
    pub enable: Toggle,
    pub name: String,
    /// Kept as the device's string; firmware may report positions outside [`OsdPosition`]
    pub pos: String,
}

impl Default for OsdChannel {
    fn default() -> Self {
        Self {
            enable: Toggle::Enabled,
            name: String::new(),
            pos: OsdPosition::LowerRight.to_string(),
        }
    }
}

/// Timestamp overlay (`osdTime`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsdTime {
    pub enable: Toggle,
    pub pos: String,
}

impl Default for OsdTime {
    fn default() -> Self {
        Self {
            enable: Toggle::Disabled,
            pos: OsdPosition::LowerRight.to_string(),
        }
    }
}

/// OSD settings for one channel (`Osd`)
///
/// `Default` is what `SetOsd` writes when nothing is customised: channel
/// name shown bottom right, timestamp hidden, no background.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Osd {
    #[serde(rename = "bgcolor")]
    pub bg_color: Toggle,
    pub channel: u32,
    pub osd_channel: OsdChannel,
    pub osd_time: OsdTime,
    /// Not every model reports it; left out of writes when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<Toggle>,
}

impl Osd {
    pub fn with_channel_name(mut self, name: impl Into<String>) -> Self {
        self.osd_channel.name = name.into();
        self
    }

    pub fn with_channel_position(mut self, position: OsdPosition) -> Self {
        self.osd_channel.pos = position.to_string();
        self
    }

    pub fn with_time(mut self, enable: bool, position: OsdPosition) -> Self {
        self.osd_time.enable = enable.into();
        self.osd_time.pos = position.to_string();
        self
    }

    /// Parsed channel name position, if the device used a known one
    pub fn channel_position(&self) -> Option<OsdPosition> {
        OsdPosition::parse(&self.osd_channel.pos)
    }
}
