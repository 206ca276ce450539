//! Envelope type definitions

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// `rspCode` reported by write/action commands on success
pub const RSP_CODE_OK: i64 = 200;

/// Command mode selector (`action` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// 0: set / write (also used by many plain getters)
    #[default]
    Write,
    /// 1: get / read, with `initial` and `range` in the response
    Read,
}

impl Action {
    pub fn code(&self) -> u8 {
        match self {
            Self::Write => 0,
            Self::Read => 1,
        }
    }
}

/// Parameter block key; commands differ in `param` vs `params`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamKey {
    #[default]
    Param,
    Params,
}

impl ParamKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Param => "param",
            Self::Params => "params",
        }
    }
}

/// One device command
///
/// Serializes to `{"cmd": .., "action": 0|1, "param"|"params": {..}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub cmd: String,
    pub action: Action,
    pub param_key: ParamKey,
    pub param: Value,
}

impl Command {
    pub fn new(cmd: impl Into<String>, action: Action) -> Self {
        Self {
            cmd: cmd.into(),
            action,
            param_key: ParamKey::Param,
            param: Value::Object(Map::new()),
        }
    }

    /// Replace the parameter block, sent under `param`
    pub fn with_param(mut self, param: Value) -> Self {
        self.param_key = ParamKey::Param;
        self.param = param;
        self
    }

    /// Replace the parameter block, sent under `params`
    pub fn with_params(mut self, params: Value) -> Self {
        self.param_key = ParamKey::Params;
        self.param = params;
        self
    }

    /// Add one entry to the parameter block
    pub fn with_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        if !self.param.is_object() {
            self.param = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.param {
            map.insert(key.into(), value);
        }
        self
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("cmd", &self.cmd)?;
        map.serialize_entry("action", &self.action.code())?;
        map.serialize_entry(self.param_key.as_str(), &self.param)?;
        map.end()
    }
}

/// Undecoded response fields keyed by name
pub type FieldMap = HashMap<String, Box<RawValue>>;

/// Failure detail inside a response envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceError {
    #[serde(default)]
    pub detail: String,
    #[serde(rename = "rspCode", default)]
    pub rsp_code: i64,
}

/// Response envelope for one command
///
/// `value`, `initial` and `range` keep raw JSON fragments; callers pick the
/// target type per field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub cmd: String,
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "HashMap::is_empty")]
    pub value: FieldMap,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "HashMap::is_empty")]
    pub initial: FieldMap,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "HashMap::is_empty")]
    pub range: FieldMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<DeviceError>,
}

impl ResponseEnvelope {
    /// Envelope-level success (`code == 0`)
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Raw fragment of a `value` field
    pub fn raw_value(&self, name: &str) -> Option<&RawValue> {
        self.value.get(name).map(|raw| &**raw)
    }

    /// Decode one `value` field
    pub fn value_field<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        decode_field(&self.value, "value", name)
    }

    /// Decode one `initial` field
    pub fn initial_field<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        decode_field(&self.initial, "initial", name)
    }

    /// Decode one `range` field
    pub fn range_field<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        decode_field(&self.range, "range", name)
    }

    /// `value.rspCode`, when present and numeric
    pub fn rsp_code(&self) -> Option<i64> {
        self.value
            .get("rspCode")
            .and_then(|raw| serde_json::from_str(raw.get()).ok())
    }

    /// Fail with [`Error::Device`] unless `code == 0`
    pub fn ensure_success(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.device_error())
        }
    }

    /// Fail with [`Error::Device`] unless `code == 0` and `rspCode == 200`
    pub fn ensure_rsp_ok(&self) -> Result<()> {
        self.ensure_success()?;
        match self.rsp_code() {
            Some(RSP_CODE_OK) => Ok(()),
            _ => Err(self.device_error()),
        }
    }

    fn device_error(&self) -> Error {
        let (rsp_code, detail) = match &self.error {
            Some(error) => (Some(error.rsp_code), error.detail.clone()),
            None => (self.rsp_code(), self.value_summary()),
        };
        Error::Device {
            cmd: self.cmd.clone(),
            code: self.code,
            rsp_code,
            detail,
        }
    }

    fn value_summary(&self) -> String {
        let mut keys: Vec<&str> = self.value.keys().map(String::as_str).collect();
        keys.sort_unstable();
        format!("camera responded with value fields [{}]", keys.join(", "))
    }
}

/// Devices send `null` for sections they have nothing to report in
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<FieldMap, D::Error> {
    Ok(Option::<FieldMap>::deserialize(deserializer)?.unwrap_or_default())
}

fn decode_field<T: DeserializeOwned>(fields: &FieldMap, section: &'static str, name: &str) -> Result<T> {
    let raw = fields.get(name).ok_or_else(|| Error::FieldMissing {
        section,
        field: name.to_string(),
    })?;
    serde_json::from_str(raw.get()).map_err(|source| Error::FieldDecode {
        field: name.to_string(),
        source,
    })
}
