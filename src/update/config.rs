use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::types::{KeyerConfig, SetConfigRequest, Setting};
use crate::Effect;
use crate::{api_get, api_post, update_field};

/// Handle configuration events (form edits, commits, service calls)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize | Event::GetConfig => {
            api_get!("/getconfig", ConfigResponse, "Get config", expect_json: KeyerConfig)
        }

        Event::WpmEdited(wpm) => update_field!(model.wpm, wpm),
        Event::WpmFarnsworthEdited(wpm) => update_field!(model.wpm_farnsworth, wpm),
        Event::WpmFarnsworthSlowEdited(wpm) => update_field!(model.wpm_farnsworth_slow, wpm),
        Event::TxEdited(flag) => update_field!(model.tx, flag),
        Event::WsConnectEdited(flag) => update_field!(model.ws_connect, flag),
        Event::WsIpEdited(ip) => update_field!(model.ws_ip, ip),

        // Each commit sends exactly the value currently held by the model;
        // validation is the device's responsibility
        Event::CommitWpm => set_config(vec![Setting::number("wpm", model.wpm)]),
        Event::CommitWpmFarnsworth => {
            set_config(vec![Setting::number("wpm_farnsworth", model.wpm_farnsworth)])
        }
        Event::CommitWpmFarnsworthSlow => set_config(vec![Setting::number(
            "wpm_farnsworth_slow",
            model.wpm_farnsworth_slow,
        )]),
        Event::CommitTx => set_config(vec![Setting::number("tx", model.tx)]),
        Event::CommitWsConnect => set_config(vec![Setting::number("ws_connect", model.ws_connect)]),
        Event::CommitWsIp => set_config(vec![Setting::text("ws_ip", model.ws_ip.clone())]),

        Event::SetConfig { settings } => set_config(settings),

        Event::ConfigResponse(Ok(fresh)) => {
            log::debug!("refreshed configuration from device: {fresh:?}");
            model.apply_fresh(fresh);
            render()
        }

        Event::ConfigResponse(Err(e)) => {
            // The displayed state simply stays stale; the device remains the
            // source of truth until the next successful refresh.
            log::warn!("configuration request failed, keeping current state: {e}");
            Command::done()
        }

        _ => unreachable!("Non-config event passed to config handler"),
    }
}

/// POST an ordered list of setting updates; an empty list still issues the
/// request and still refreshes the full state from the response.
fn set_config(settings: Vec<Setting>) -> Command<Effect, Event> {
    let request = SetConfigRequest { settings };
    api_post!("/setconfig", ConfigResponse, "Set config",
        body_json: &request,
        expect_json: KeyerConfig
    )
}
