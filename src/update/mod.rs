mod config;
mod keyer;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Configuration domain
        Event::Initialize
        | Event::WpmEdited(_)
        | Event::WpmFarnsworthEdited(_)
        | Event::WpmFarnsworthSlowEdited(_)
        | Event::TxEdited(_)
        | Event::WsConnectEdited(_)
        | Event::WsIpEdited(_)
        | Event::CommitWpm
        | Event::CommitWpmFarnsworth
        | Event::CommitWpmFarnsworthSlow
        | Event::CommitTx
        | Event::CommitWsConnect
        | Event::CommitWsIp
        | Event::GetConfig
        | Event::SetConfig { .. }
        | Event::ConfigResponse(_) => config::handle(event, model),

        // Keyer text domain
        Event::KeyerTextEdited(_) | Event::SendText | Event::TextSubmitResponse(_) => {
            keyer::handle(event, model)
        }
    }
}
