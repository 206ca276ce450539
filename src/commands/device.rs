//! Storage commands

use super::{execute, query_field, CommandTransport};
use crate::envelope::{Action, Command};
use crate::error::Result;
use crate::models::{HddInfo, OneOrMany};
use serde_json::json;

/// HDD / SD card information
pub async fn get_hdd_info<T: CommandTransport + ?Sized>(transport: &T) -> Result<Vec<HddInfo>> {
    let command = Command::new("GetHddInfo", Action::Write).with_params(json!({}));
    let info: OneOrMany<HddInfo> = query_field(transport, command, "HddInfo").await?;
    Ok(info.into())
}

/// Format a disk (default disk id: 0)
pub async fn format_hdd<T: CommandTransport + ?Sized>(transport: &T, hdd_id: u32) -> Result<()> {
    let command = Command::new("Format", Action::Write)
        .with_params(json!({ "HddInfo": { "id": hdd_id } }));
    execute(transport, command).await
}
