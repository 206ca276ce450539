//! Envelope Codec
//!
//! ## Wire format
//!
//! ```text
//! unauthenticated:  [ {"cmd": .., "action": .., "param": {..}} ]
//! authenticated:    {"token": "..", "cmd": [ {"cmd": .., ..} ]}
//! response:         {"cmd": .., "code": 0, "value": {..}}
//!                   or a one-element array of it
//! ```

mod types;

pub use types::*;

use crate::error::{Error, Result};
use serde::Serialize;

#[derive(Serialize)]
struct TokenEnvelope<'a, C> {
    token: &'a str,
    cmd: C,
}

/// Encode one command payload into a request body
///
/// With `auth_required` the payload is wrapped together with `token`
/// (an empty string when no token is set).
pub fn encode<P: Serialize + ?Sized>(
    payload: &P,
    token: Option<&str>,
    auth_required: bool,
) -> Result<Vec<u8>> {
    wrap([payload], token, auth_required)
}

/// Encode several command payloads into one request body
pub fn encode_batch<P: Serialize>(
    payloads: &[P],
    token: Option<&str>,
    auth_required: bool,
) -> Result<Vec<u8>> {
    if payloads.is_empty() {
        return Err(Error::Configuration(
            "a batch needs at least one command".to_string(),
        ));
    }
    wrap(payloads, token, auth_required)
}

fn wrap<C: Serialize>(commands: C, token: Option<&str>, auth_required: bool) -> Result<Vec<u8>> {
    let body = if auth_required {
        serde_json::to_vec(&TokenEnvelope {
            token: token.unwrap_or_default(),
            cmd: commands,
        })
    } else {
        serde_json::to_vec(&commands)
    };
    body.map_err(Error::Encoding)
}

/// Decode the response to a single command
pub fn decode(body: &[u8]) -> Result<ResponseEnvelope> {
    let mut envelopes = decode_batch(body)?;
    if envelopes.len() != 1 {
        return Err(Error::Decoding(serde::de::Error::custom(format!(
            "expected one response envelope, got {}",
            envelopes.len()
        ))));
    }
    Ok(envelopes.remove(0))
}

/// Decode the responses to a batch of commands
pub fn decode_batch(body: &[u8]) -> Result<Vec<ResponseEnvelope>> {
    let first = body.iter().find(|b| !b.is_ascii_whitespace());

    let mut envelopes = if first == Some(&b'[') {
        serde_json::from_slice::<Vec<ResponseEnvelope>>(body).map_err(Error::Decoding)?
    } else {
        vec![serde_json::from_slice::<ResponseEnvelope>(body).map_err(Error::Decoding)?]
    };

    // value is only meaningful when code == 0
    for envelope in &mut envelopes {
        if !envelope.is_success() {
            envelope.value.clear();
        }
    }
    Ok(envelopes)
}
