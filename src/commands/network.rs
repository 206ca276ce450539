//! Network commands

use super::{execute, query_field, CommandTransport};
use crate::envelope::{Action, Command};
use crate::error::{Error, Result};
use crate::models::{NetworkGeneral, NetworkNtp, NetworkPort};

pub async fn get_network_ports<T: CommandTransport + ?Sized>(transport: &T) -> Result<NetworkPort> {
    query_field(transport, Command::new("GetNetPort", Action::Read), "NetPort").await
}

/// Write all service ports at once
pub async fn set_network_ports<T: CommandTransport + ?Sized>(
    transport: &T,
    ports: &NetworkPort,
) -> Result<()> {
    let ports = serde_json::to_value(ports).map_err(Error::Encoding)?;
    let command = Command::new("SetNetPort", Action::Write).with_entry("NetPort", ports);
    execute(transport, command).await
}

/// IP / DNS / link type
pub async fn get_local_link<T: CommandTransport + ?Sized>(transport: &T) -> Result<NetworkGeneral> {
    query_field(transport, Command::new("GetLocalLink", Action::Read), "LocalLink").await
}

pub async fn get_ntp<T: CommandTransport + ?Sized>(transport: &T) -> Result<NetworkNtp> {
    query_field(transport, Command::new("GetNtp", Action::Read), "Ntp").await
}
