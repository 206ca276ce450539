//! Command Builders
//!
//! Each feature group is an independent module that only depends on the
//! [`CommandTransport`] capability: build a [`Command`], send it, pick the
//! response fields it needs.
//!
//! ## Modules
//! - `device`: HDD info / format
//! - `display`: OSD overlay
//! - `system`: device info, name, time (get / set), performance, reboot
//! - `network`: ports, local link, NTP

pub mod device;
pub mod display;
pub mod network;
pub mod system;

use crate::dispatcher::{Dispatcher, HttpMethod};
use crate::envelope::{Command, ResponseEnvelope};
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio::sync::RwLock;

/// Capability to execute one command against a device
pub trait CommandTransport {
    fn request(
        &self,
        method: HttpMethod,
        command: &Command,
        auth_required: bool,
    ) -> impl Future<Output = Result<ResponseEnvelope>> + Send;
}

impl CommandTransport for Dispatcher {
    fn request(
        &self,
        method: HttpMethod,
        command: &Command,
        auth_required: bool,
    ) -> impl Future<Output = Result<ResponseEnvelope>> + Send {
        Dispatcher::request(self, method, command, auth_required)
    }
}

/// Shared dispatcher: requests take the read lock, token rotation the write lock
impl CommandTransport for RwLock<Dispatcher> {
    fn request(
        &self,
        method: HttpMethod,
        command: &Command,
        auth_required: bool,
    ) -> impl Future<Output = Result<ResponseEnvelope>> + Send {
        async move {
            let dispatcher = self.read().await;
            dispatcher.request(method, command, auth_required).await
        }
    }
}

/// Authenticated POST, envelope must report success
pub(crate) async fn query<T: CommandTransport + ?Sized>(
    transport: &T,
    command: Command,
) -> Result<ResponseEnvelope> {
    let envelope = transport.request(HttpMethod::Post, &command, true).await?;
    envelope.ensure_success()?;
    Ok(envelope)
}

/// Authenticated POST returning one decoded `value` field
pub(crate) async fn query_field<T, R>(transport: &T, command: Command, field: &str) -> Result<R>
where
    T: CommandTransport + ?Sized,
    R: DeserializeOwned,
{
    query(transport, command).await?.value_field(field)
}

/// Authenticated POST for write/action commands (`rspCode == 200`)
pub(crate) async fn execute<T: CommandTransport + ?Sized>(transport: &T, command: Command) -> Result<()> {
    let envelope = transport.request(HttpMethod::Post, &command, true).await?;
    envelope.ensure_rsp_ok()
}
