//! Error handling for the Reolink REST transport

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
///
/// The transport layer only reports configuration, transport, network and
/// JSON failures. A device answering with `code != 0` or `rspCode != 200`
/// is valid envelope data; `Device` is raised by command builders that
/// choose to classify it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad host, URL or proxy settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Proxy / dialer / client construction failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Connection refused, timeout, TLS failure, body read failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request body could not be serialized
    #[error("Encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Response body is not JSON or not a response envelope
    #[error("Decoding error: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Field absent from `value` / `initial` / `range`
    #[error("Field {section}.{field} missing from response")]
    FieldMissing {
        section: &'static str,
        field: String,
    },

    /// Field present but not decodable into the requested type
    #[error("Field {field} could not be decoded: {source}")]
    FieldDecode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// Device reported a failure inside the envelope
    #[error("Device rejected {cmd} (code {code}, rspCode {rsp_code:?}): {detail}")]
    Device {
        cmd: String,
        code: i64,
        rsp_code: Option<i64>,
        detail: String,
    },
}

impl Error {
    /// Transport-level failure (as opposed to a device-level rejection)
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Network(_))
    }
}
