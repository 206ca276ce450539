//! Transport Selector type definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use url::Url;

/// Proxy kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyKind {
    Http,
    Https,
    Socks5,
}

impl ProxyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Socks5 => "socks5",
        }
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised kinds are treated as an HTTP proxy
impl From<&str> for ProxyKind {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "https" => Self::Https,
            "socks5" | "socks5h" => Self::Socks5,
            _ => Self::Http,
        }
    }
}

/// Proxy credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ProxyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyAuth")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Network-layer hint for the SOCKS5 dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkHint {
    #[default]
    Tcp,
    Tcp4,
    Tcp6,
}

impl NetworkHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Tcp4 => "tcp4",
            Self::Tcp6 => "tcp6",
        }
    }

    /// Local address that pins the outbound socket to one address family
    pub fn local_bind(&self) -> Option<IpAddr> {
        match self {
            Self::Tcp => None,
            Self::Tcp4 => Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            Self::Tcp6 => Some(IpAddr::V6(Ipv6Addr::UNSPECIFIED)),
        }
    }
}

impl FromStr for NetworkHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "tcp" => Ok(Self::Tcp),
            "tcp4" => Ok(Self::Tcp4),
            "tcp6" => Ok(Self::Tcp6),
            other => Err(Error::Configuration(format!(
                "unsupported proxy network '{}' (expected tcp, tcp4 or tcp6)",
                other
            ))),
        }
    }
}

/// Proxy configuration
///
/// At most one per dispatcher; fixed for the dispatcher's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub kind: ProxyKind,
    pub host: String,
    pub port: u16,
    pub auth: Option<ProxyAuth>,
    pub network: Option<NetworkHint>,
}

impl ProxyConfig {
    pub fn new(kind: ProxyKind, host: impl Into<String>, port: u16) -> Self {
        Self {
            kind,
            host: host.into(),
            port,
            auth: None,
            network: None,
        }
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(ProxyAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn with_network(mut self, network: NetworkHint) -> Self {
        self.network = Some(network);
        self
    }

    /// Network hint, `tcp` when unset
    pub fn network(&self) -> NetworkHint {
        self.network.unwrap_or_default()
    }

    /// Parse `scheme://[user:pass@]host:port`
    ///
    /// Credentials are kept exactly as written in the URL (percent-encoded).
    pub fn from_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim())
            .map_err(|e| Error::Configuration(format!("invalid proxy URL '{}': {}", raw, e)))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::Configuration(format!("proxy URL '{}' has no host", raw)))?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string();

        let port = url
            .port_or_known_default()
            .ok_or_else(|| Error::Configuration(format!("proxy URL '{}' has no port", raw)))?;

        let auth = if url.username().is_empty() {
            None
        } else {
            Some(ProxyAuth {
                username: url.username().to_string(),
                password: url.password().unwrap_or_default().to_string(),
            })
        };

        let config = Self {
            kind: ProxyKind::from(url.scheme()),
            host,
            port,
            auth,
            network: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Configuration("proxy host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(Error::Configuration("proxy port must be greater than 0".to_string()));
        }
        Ok(())
    }
}
