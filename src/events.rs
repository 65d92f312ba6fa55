use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen on the configuration page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize,

    // Form edits from the shell (two-way binding writes back into the core)
    KeyerTextEdited(String),
    WpmEdited(u32),
    WpmFarnsworthEdited(u32),
    WpmFarnsworthSlowEdited(u32),
    TxEdited(Flag),
    WsConnectEdited(Flag),
    WsIpEdited(String),

    // Commit actions, one per bound control; each sends the current value
    // of exactly one setting to the device
    CommitWpm,
    CommitWpmFarnsworth,
    CommitWpmFarnsworthSlow,
    CommitTx,
    CommitWsConnect,
    CommitWsIp,

    // Configuration service calls
    GetConfig,
    SetConfig {
        settings: Vec<Setting>,
    },

    // Keyer text transmission
    SendText,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    ConfigResponse(Result<KeyerConfig, String>),
    #[serde(skip)]
    TextSubmitResponse(Result<String, String>),
}
