use super::*;
use crux_core::testing::AppTester;

fn fresh_config() -> KeyerConfig {
    KeyerConfig {
        wpm: 25,
        wpm_farnsworth: 5,
        wpm_farnsworth_slow: 3,
        ip: "10.0.0.5".to_string(),
        mac: "AA:BB:CC:DD:EE:FF".to_string(),
        tx: Flag::On,
        ws_connect: Flag::Off,
        ws_ip: String::new(),
    }
}

#[test]
fn test_default_model() {
    let model = Model::default();

    assert_eq!(model.keyer_text, "hello world");
    assert_eq!(model.wpm, 0);
    assert_eq!(model.wpm_farnsworth, 0);
    assert_eq!(model.wpm_farnsworth_slow, 0);
    assert_eq!(model.ip, "");
    assert_eq!(model.mac, "");
    assert_eq!(model.tx, Flag::On);
    assert_eq!(model.ws_connect, Flag::Off);
    assert_eq!(model.ws_ip, "");
}

#[test]
fn test_edit_updates_field_and_renders() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut command = app.update(Event::WpmEdited(25), &mut model);

    assert_eq!(model.wpm, 25);
    assert!(command.expect_one_effect().is_render());
}

#[test]
fn test_unchanged_edit_does_not_render() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut command = app.update(Event::WpmEdited(0), &mut model);

    assert_eq!(model.wpm, 0);
    assert!(command.effects().next().is_none());
}

#[test]
fn test_get_config_issues_request() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut command = app.update(Event::GetConfig, &mut model);
    let request = command.expect_one_effect().expect_http();

    assert_eq!(request.operation.method, "GET");
    assert_eq!(request.operation.url, "https://relative/getconfig");
    assert!(request.operation.body.is_empty());
}

#[test]
fn test_commit_wpm_posts_single_setting() {
    let app = AppTester::<App>::default();
    let mut model = Model {
        wpm: 20,
        ..Default::default()
    };

    let mut command = app.update(Event::CommitWpm, &mut model);
    let request = command.expect_one_effect().expect_http();

    assert_eq!(request.operation.method, "POST");
    assert_eq!(request.operation.url, "https://relative/setconfig");
    assert_eq!(
        request.operation.body,
        br#"{"settings":[{"name":"wpm","value":20}]}"#.to_vec()
    );
}

#[test]
fn test_commit_ws_ip_posts_string_value() {
    let app = AppTester::<App>::default();
    let mut model = Model {
        ws_ip: "10.0.0.9".to_string(),
        ..Default::default()
    };

    let mut command = app.update(Event::CommitWsIp, &mut model);
    let request = command.expect_one_effect().expect_http();

    assert_eq!(request.operation.url, "https://relative/setconfig");
    assert_eq!(
        request.operation.body,
        br#"{"settings":[{"name":"ws_ip","value":"10.0.0.9"}]}"#.to_vec()
    );
}

#[test]
fn test_commit_tx_posts_flag_as_number() {
    let app = AppTester::<App>::default();
    let mut model = Model {
        tx: Flag::On,
        ..Default::default()
    };

    let mut command = app.update(Event::CommitTx, &mut model);
    let request = command.expect_one_effect().expect_http();

    assert_eq!(
        request.operation.body,
        br#"{"settings":[{"name":"tx","value":1}]}"#.to_vec()
    );
}

#[test]
fn test_set_config_with_empty_settings_still_posts() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut command = app.update(Event::SetConfig { settings: vec![] }, &mut model);
    let request = command.expect_one_effect().expect_http();

    assert_eq!(request.operation.method, "POST");
    assert_eq!(request.operation.url, "https://relative/setconfig");
    assert_eq!(request.operation.body, br#"{"settings":[]}"#.to_vec());
}

#[test]
fn test_config_response_overwrites_all_fields() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::ConfigResponse(Ok(fresh_config())), &mut model);

    assert_eq!(model.wpm, 25);
    assert_eq!(model.wpm_farnsworth, 5);
    assert_eq!(model.wpm_farnsworth_slow, 3);
    assert_eq!(model.ip, "10.0.0.5");
    assert_eq!(model.mac, "AA:BB:CC:DD:EE:FF");
    assert_eq!(model.tx, Flag::On);
    assert_eq!(model.ws_connect, Flag::Off);
    assert_eq!(model.ws_ip, "");
    // Transient text entry is not device configuration
    assert_eq!(model.keyer_text, "hello world");
}

#[test]
fn test_config_response_failure_keeps_state() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let _command = app.update(Event::ConfigResponse(Ok(fresh_config())), &mut model);
    let before = model.clone();

    let mut command = app.update(
        Event::ConfigResponse(Err("Get config failed: HTTP 500".to_string())),
        &mut model,
    );

    assert_eq!(model, before);
    assert!(command.effects().next().is_none());
}

#[test]
fn test_commit_then_response_scenario() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    // User sets wpm to 25 and commits it
    let _command = app.update(Event::WpmEdited(25), &mut model);
    let mut command = app.update(Event::CommitWpm, &mut model);
    let request = command.expect_one_effect().expect_http();
    assert_eq!(
        request.operation.body,
        br#"{"settings":[{"name":"wpm","value":25}]}"#.to_vec()
    );

    // Device answers with the full refreshed configuration
    let _command = app.update(Event::ConfigResponse(Ok(fresh_config())), &mut model);

    assert_eq!(model.wpm, 25);
    assert_eq!(model.ip, "10.0.0.5");
    assert_eq!(model.mac, "AA:BB:CC:DD:EE:FF");
}

#[test]
fn test_send_text_posts_entered_text() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let _command = app.update(Event::KeyerTextEdited("CQ CQ DE TEST".to_string()), &mut model);

    let mut command = app.update(Event::SendText, &mut model);
    let request = command.expect_one_effect().expect_http();

    assert_eq!(request.operation.method, "POST");
    assert_eq!(request.operation.url, "https://relative/textsubmit");
    assert_eq!(
        request.operation.body,
        br#"{"text":"CQ CQ DE TEST"}"#.to_vec()
    );
}

#[test]
fn test_send_text_success_clears_text() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::TextSubmitResponse(Ok("{}".to_string())), &mut model);

    assert_eq!(model.keyer_text, "");
}

#[test]
fn test_send_text_failure_keeps_text() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::TextSubmitResponse(Err("Submit text failed: HTTP 500".to_string())),
        &mut model,
    );

    assert_eq!(model.keyer_text, "hello world");
}

#[test]
fn test_initialize_fetches_config() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut command = app.update(Event::Initialize, &mut model);
    let request = command.expect_one_effect().expect_http();

    assert_eq!(request.operation.method, "GET");
    assert_eq!(request.operation.url, "https://relative/getconfig");
}

#[test]
fn test_keyer_config_wire_format() {
    let payload = r#"{
        "wpm": 25,
        "wpm_farnsworth": 5,
        "wpm_farnsworth_slow": 3,
        "ip": "10.0.0.5",
        "mac": "AA:BB:CC:DD:EE:FF",
        "tx": 1,
        "ws_connect": 0,
        "ws_ip": ""
    }"#;

    let config: KeyerConfig = serde_json::from_str(payload).expect("valid config payload");

    assert_eq!(config, fresh_config());
    assert_eq!(serde_json::to_string(&Flag::On).expect("serializable"), "1");
    assert_eq!(serde_json::to_string(&Flag::Off).expect("serializable"), "0");
}
