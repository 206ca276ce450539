//! System commands

use super::{execute, query, query_field, CommandTransport};
use crate::envelope::{Action, Command};
use crate::error::{Error, Result};
use crate::models::{
    DeviceInformation, DeviceName, DeviceNorm, DstInformation, GeneralSystemInformation,
    PerformanceInformation, TimeInformation,
};
use serde_json::json;

/// Model, firmware, serial
pub async fn get_device_info<T: CommandTransport + ?Sized>(transport: &T) -> Result<DeviceInformation> {
    query_field(transport, Command::new("GetDevInfo", Action::Write), "DevInfo").await
}

pub async fn get_device_name<T: CommandTransport + ?Sized>(transport: &T) -> Result<DeviceName> {
    query_field(transport, Command::new("GetDevName", Action::Write), "DevName").await
}

pub async fn set_device_name<T: CommandTransport + ?Sized>(transport: &T, name: &DeviceName) -> Result<()> {
    let command = Command::new("SetDevName", Action::Write)
        .with_entry("DevName", json!({ "name": name.name }));
    execute(transport, command).await
}

/// CPU / codec / network load
pub async fn get_performance<T: CommandTransport + ?Sized>(
    transport: &T,
) -> Result<PerformanceInformation> {
    query_field(transport, Command::new("GetPerformance", Action::Write), "Performance").await
}

/// Clock and DST settings
pub async fn get_time<T: CommandTransport + ?Sized>(
    transport: &T,
) -> Result<(TimeInformation, Option<DstInformation>)> {
    let envelope = query(transport, Command::new("GetTime", Action::Write)).await?;
    let time = envelope.value_field("Time")?;
    let dst = match envelope.raw_value("Dst") {
        Some(_) => Some(envelope.value_field("Dst")?),
        None => None,
    };
    Ok((time, dst))
}

/// Set the clock, and the DST rules when given
pub async fn set_time<T: CommandTransport + ?Sized>(
    transport: &T,
    time: &TimeInformation,
    dst: Option<&DstInformation>,
) -> Result<()> {
    let mut command = Command::new("SetTime", Action::Write)
        .with_entry("Time", serde_json::to_value(time).map_err(Error::Encoding)?);
    if let Some(dst) = dst {
        command = command.with_entry("Dst", serde_json::to_value(dst).map_err(Error::Encoding)?);
    }
    execute(transport, command).await
}

/// Time + DST + video norm (two round trips)
pub async fn get_general_system<T: CommandTransport + ?Sized>(
    transport: &T,
) -> Result<GeneralSystemInformation> {
    let time_envelope = query(transport, Command::new("GetTime", Action::Read)).await?;
    let norm_envelope = query(transport, Command::new("GetNorm", Action::Read)).await?;

    let dst = match time_envelope.raw_value("Dst") {
        Some(_) => Some(time_envelope.value_field("Dst")?),
        None => None,
    };

    Ok(GeneralSystemInformation {
        time: time_envelope.value_field("Time")?,
        dst,
        norm: DeviceNorm {
            norm: norm_envelope.value_field("norm")?,
        },
    })
}

pub async fn reboot<T: CommandTransport + ?Sized>(transport: &T) -> Result<()> {
    execute(transport, Command::new("Reboot", Action::Write)).await
}
