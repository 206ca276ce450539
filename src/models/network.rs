//! Network models

use super::Toggle;
use serde::{Deserialize, Serialize};

/// Service ports (`NetPort`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkPort {
    pub http_enable: Toggle,
    pub http_port: u16,
    pub https_enable: Toggle,
    pub https_port: u16,
    pub media_port: u16,
    pub onvif_enable: Toggle,
    pub onvif_port: u16,
    pub rtmp_enable: Toggle,
    pub rtmp_port: u16,
    pub rtsp_enable: Toggle,
    pub rtsp_port: u16,
}

/// Factory defaults
impl Default for NetworkPort {
    fn default() -> Self {
        Self {
            http_enable: Toggle::Enabled,
            http_port: 80,
            https_enable: Toggle::Enabled,
            https_port: 443,
            media_port: 9000,
            onvif_enable: Toggle::Enabled,
            onvif_port: 8000,
            rtmp_enable: Toggle::Enabled,
            rtmp_port: 1935,
            rtsp_enable: Toggle::Enabled,
            rtsp_port: 554,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkGeneralDns {
    pub auto: u8,
    pub dns1: String,
    pub dns2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkGeneralStatic {
    pub gateway: String,
    pub ip: String,
    pub mask: String,
}

/// Local link (`LocalLink`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkGeneral {
    pub active_link: String,
    pub dns: NetworkGeneralDns,
    pub mac: String,
    #[serde(rename = "static")]
    pub static_config: NetworkGeneralStatic,
    /// `DHCP` or `Static`
    #[serde(rename = "type")]
    pub link_type: String,
}

/// NTP settings (`Ntp`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkNtp {
    pub enable: Toggle,
    pub interval: u32,
    pub port: u16,
    pub server: String,
}
