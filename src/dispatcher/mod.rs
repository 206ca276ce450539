//! Request Dispatcher
//!
//! ## Responsibilities
//!
//! - Own the connection configuration and the session token
//! - Encode a command, send it over the selected route, decode the reply
//!
//! One call is one round trip: no retry, no cache. A non-2xx HTTP status is
//! not an error here; the device reports failures inside the envelope.
//!
//! ## Token rotation
//!
//! `set_token` takes `&mut self`, so rotating the token while requests are
//! in flight needs an external guard. `tokio::sync::RwLock<Dispatcher>`
//! implements [`CommandTransport`](crate::commands::CommandTransport) for
//! exactly that: requests hold the read lock, rotation takes the write lock.

use crate::config::ClientConfig;
use crate::envelope::{self, ResponseEnvelope};
use crate::error::{Error, Result};
use crate::transport::{self, Route};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use url::Url;

const CONTENT_CLASS: &str = "content-class";
const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl HttpMethod {
    fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// Request dispatcher for one device
pub struct Dispatcher {
    config: ClientConfig,
    url: Url,
    route: Route,
    http: reqwest::Client,
    token: Option<String>,
}

impl Dispatcher {
    /// Create a dispatcher for one device
    ///
    /// Selects the route and builds the HTTP client up front, so proxy and
    /// SOCKS5 setup errors are reported here rather than on first request.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let url = config.target_url()?;
        let route = transport::select_route(config.proxy())?;
        let http = transport::build_client(&route, &config.transport_options())?;

        debug!(
            url = %url,
            route = %route.describe(),
            "Dispatcher created"
        );

        Ok(Self {
            config,
            url,
            route,
            http,
            token: None,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Parsed target URL
    ///
    /// An explicit default port (80 for http, 443 for https) is normalized
    /// away here; [`ClientConfig::url_string`] keeps the configured form.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Set or rotate the session token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Send one command and decode its response envelope
    pub async fn request<P: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        payload: &P,
        auth_required: bool,
    ) -> Result<ResponseEnvelope> {
        let body = envelope::encode(payload, self.token(), auth_required)?;
        let bytes = self.send(method, body, auth_required).await?;
        envelope::decode(&bytes)
    }

    /// Send several commands in one envelope
    ///
    /// Responses come back in submission order.
    pub async fn request_batch<P: Serialize>(
        &self,
        method: HttpMethod,
        payloads: &[P],
        auth_required: bool,
    ) -> Result<Vec<ResponseEnvelope>> {
        let body = envelope::encode_batch(payloads, self.token(), auth_required)?;
        let bytes = self.send(method, body, auth_required).await?;
        envelope::decode_batch(&bytes)
    }

    async fn send(&self, method: HttpMethod, body: Vec<u8>, auth_required: bool) -> Result<Vec<u8>> {
        debug!(
            method = %method,
            url = %self.url,
            auth = auth_required,
            body_len = body.len(),
            "Sending device request"
        );

        let response = self
            .http
            .request(method.as_reqwest(), self.url.clone())
            .headers(request_headers())
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Network(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("failed to read response body: {}", e)))?;

        debug!(
            status = %status,
            body_len = bytes.len(),
            "Received device response"
        );

        Ok(bytes.to_vec())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("url", &self.url.as_str())
            .field("route", &self.route.describe())
            .field("token", &self.token.as_ref().map(|_| "****"))
            .finish()
    }
}

/// Fixed headers, built fresh for every request
fn request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(CONTENT_CLASS),
        HeaderValue::from_static(APPLICATION_JSON),
    );
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers
}
