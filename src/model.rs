use serde::{Deserialize, Serialize};

use crate::types::{Flag, KeyerConfig};

/// Application Model - the complete state of the configuration page
/// Also serves as the ViewModel when serialized
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Message to transmit via the keyer. UI-only, never sent to `/setconfig`.
    pub keyer_text: String,

    // Device settings, mirrored from the device
    pub wpm: u32,
    pub wpm_farnsworth: u32,
    pub wpm_farnsworth_slow: u32,
    pub ip: String,
    pub mac: String,
    pub tx: Flag,
    pub ws_connect: Flag,
    pub ws_ip: String,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            keyer_text: "hello world".to_string(),
            wpm: 0,
            wpm_farnsworth: 0,
            wpm_farnsworth_slow: 0,
            ip: String::new(),
            mac: String::new(),
            tx: Flag::On,
            ws_connect: Flag::Off,
            ws_ip: String::new(),
        }
    }
}

impl Model {
    /// Overwrite all device settings from a service response.
    ///
    /// Every successful `/getconfig` or `/setconfig` call replaces the local
    /// copy wholesale. There is no partial or merge update; the device owns
    /// the durable configuration.
    pub fn apply_fresh(&mut self, fresh: KeyerConfig) {
        self.wpm = fresh.wpm;
        self.wpm_farnsworth = fresh.wpm_farnsworth;
        self.wpm_farnsworth_slow = fresh.wpm_farnsworth_slow;
        self.ip = fresh.ip;
        self.mac = fresh.mac;
        self.tx = fresh.tx;
        self.ws_connect = fresh.ws_connect;
        self.ws_ip = fresh.ws_ip;
    }
}
