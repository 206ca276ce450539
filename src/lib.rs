//! Reolink REST transport
//!
//! Client-side request dispatch for the Reolink camera HTTP command API.
//!
//! ## Architecture
//!
//! 1. Transport - route selection (direct / HTTP(S) proxy / SOCKS5) and client construction
//! 2. Envelope - command envelope encoding, response envelope decoding (deferred per field)
//! 3. Dispatcher - configuration + session token, one request/response cycle per call
//! 4. Commands - feature groups built on the `CommandTransport` capability
//!
//! ## Data flow
//!
//! ```text
//! Command -> Dispatcher::request -> envelope::encode -> reqwest -> envelope::decode
//!         -> ResponseEnvelope -> value_field::<T>("...")
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use reolink_rest::{commands, ClientConfig, Dispatcher, ProxyConfig, ProxyKind};
//!
//! # async fn run() -> reolink_rest::Result<()> {
//! let config = ClientConfig::builder("192.168.1.100")
//!     .proxy(ProxyConfig::new(ProxyKind::Socks5, "127.0.0.1", 5942).with_auth("foo", "bar"))
//!     .build()?;
//! let mut dispatcher = Dispatcher::new(config)?;
//! dispatcher.set_token("token-from-login");
//!
//! commands::device::format_hdd(&dispatcher, 0).await?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod models;
pub mod transport;

pub use commands::CommandTransport;
pub use config::{ClientConfig, ClientConfigBuilder, Scheme, DEFAULT_ENDPOINT};
pub use dispatcher::{Dispatcher, HttpMethod};
pub use envelope::{Action, Command, DeviceError, ParamKey, ResponseEnvelope};
pub use error::{Error, Result};
pub use transport::{NetworkHint, ProxyAuth, ProxyConfig, ProxyKind, Route};
