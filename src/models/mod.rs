//! Decode targets for command responses

pub mod device;
pub mod display;
pub mod network;
pub mod system;

pub use device::*;
pub use display::*;
pub use network::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// On/off flag, `0` / `1` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Toggle {
    #[default]
    Disabled,
    Enabled,
}

impl From<u8> for Toggle {
    fn from(value: u8) -> Self {
        if value == 0 {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }
}

impl From<Toggle> for u8 {
    fn from(value: Toggle) -> Self {
        match value {
            Toggle::Disabled => 0,
            Toggle::Enabled => 1,
        }
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Devices answer with either one object or a list of them
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    // Tried first: a struct also deserializes from a sequence
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}
