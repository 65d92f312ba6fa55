use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::types::TextSubmitRequest;
use crate::Effect;
use crate::{api_post, update_field};

/// Handle keyer text events (message editing and transmission)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::KeyerTextEdited(text) => update_field!(model.keyer_text, text),

        Event::SendText => {
            let request = TextSubmitRequest {
                text: model.keyer_text.clone(),
            };
            api_post!("/textsubmit", TextSubmitResponse, "Submit text",
                body_json: &request,
                expect_string
            )
        }

        Event::TextSubmitResponse(Ok(body)) => {
            log::debug!("text submitted to keyer: {body}");
            model.keyer_text.clear();
            render()
        }

        Event::TextSubmitResponse(Err(e)) => {
            // The entered text stays in place so the user can retry manually.
            log::warn!("text submission failed: {e}");
            Command::done()
        }

        _ => unreachable!("Non-keyer event passed to keyer handler"),
    }
}
