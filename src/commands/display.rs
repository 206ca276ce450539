//! Display commands

use super::{execute, query_field, CommandTransport};
use crate::envelope::{Action, Command};
use crate::error::{Error, Result};
use crate::models::Osd;
use serde_json::json;

/// OSD settings of one channel
pub async fn get_osd<T: CommandTransport + ?Sized>(transport: &T, channel: u32) -> Result<Osd> {
    let command = Command::new("GetOsd", Action::Read).with_entry("channel", json!(channel));
    query_field(transport, command, "Osd").await
}

/// Write the OSD settings of `osd.channel`
pub async fn set_osd<T: CommandTransport + ?Sized>(transport: &T, osd: &Osd) -> Result<()> {
    let osd = serde_json::to_value(osd).map_err(Error::Encoding)?;
    let command = Command::new("SetOsd", Action::Write).with_entry("Osd", osd);
    execute(transport, command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fake::FakeTransport;
    use crate::models::{OsdPosition, Toggle};

    #[tokio::test]
    async fn test_get_osd() {
        let transport = FakeTransport::with_replies(&[
            r#"{"cmd":"GetOsd","code":0,
                "initial":{"Osd":{"bgcolor":0,"channel":0}},
                "range":{"Osd":{"bgcolor":"boolean"}},
                "value":{"Osd":{"bgcolor":0,"channel":1,
                    "osdChannel":{"enable":1,"name":"Garage","pos":"Lower Right"},
                    "osdTime":{"enable":1,"pos":"Top Center"}}}}"#,
        ]);
        let osd = get_osd(&transport, 1).await.unwrap();
        assert_eq!(osd.channel, 1);
        assert_eq!(osd.osd_channel.name, "Garage");
        assert_eq!(osd.osd_time.enable, Toggle::Enabled);
        assert_eq!(osd.watermark, None);

        assert_eq!(
            transport.sent_json(0),
            json!({"cmd": "GetOsd", "action": 1, "param": {"channel": 1}})
        );
    }

    #[tokio::test]
    async fn test_set_osd_payload() {
        let transport = FakeTransport::with_replies(&[
            r#"{"cmd":"SetOsd","code":0,"value":{"rspCode":200}}"#,
        ]);
        let osd = Osd::default()
            .with_channel_name("Porch")
            .with_channel_position(OsdPosition::UpperLeft)
            .with_time(true, OsdPosition::BottomCenter);
        set_osd(&transport, &osd).await.unwrap();

        let sent = transport.sent_json(0);
        assert_eq!(sent["cmd"], json!("SetOsd"));
        assert_eq!(sent["action"], json!(0));
        assert_eq!(
            sent["param"]["Osd"],
            json!({
                "bgcolor": 0,
                "channel": 0,
                "osdChannel": {"enable": 1, "name": "Porch", "pos": "Upper Left"},
                "osdTime": {"enable": 1, "pos": "Bottom Center"}
            })
        );
        assert!(transport.sent()[0].2);
    }

    #[tokio::test]
    async fn test_set_osd_rejected() {
        let transport = FakeTransport::with_replies(&[
            r#"{"cmd":"SetOsd","code":1,"value":null,"error":{"detail":"param error","rspCode":-4}}"#,
        ]);
        assert!(matches!(
            set_osd(&transport, &Osd::default()).await,
            Err(Error::Device { rsp_code: Some(-4), .. })
        ));
    }
}
