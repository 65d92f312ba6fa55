use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// On/off switch carried as a literal `0`/`1` on the wire
#[derive(Debug, Clone, Copy, Default, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum Flag {
    #[default]
    Off = 0,
    On = 1,
}

impl From<Flag> for u32 {
    fn from(flag: Flag) -> Self {
        flag as u32
    }
}

/// Full device configuration as returned by `/getconfig` and `/setconfig`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyerConfig {
    pub wpm: u32,
    pub wpm_farnsworth: u32,
    pub wpm_farnsworth_slow: u32,
    pub ip: String,
    pub mac: String,
    pub tx: Flag,
    pub ws_connect: Flag,
    pub ws_ip: String,
}

/// A single named setting update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Setting {
    pub name: String,
    pub value: SettingValue,
}

impl Setting {
    /// A numeric setting (speeds and 0/1 flags)
    pub fn number(name: impl Into<String>, value: impl Into<u32>) -> Self {
        Self {
            name: name.into(),
            value: SettingValue::Number(value.into()),
        }
    }

    /// A string setting (addresses)
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: SettingValue::Text(value.into()),
        }
    }
}

/// Setting values are numbers or strings depending on the field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SettingValue {
    Number(u32),
    Text(String),
}

/// `/setconfig` request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetConfigRequest {
    pub settings: Vec<Setting>,
}
