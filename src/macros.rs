/// Macro for model field updates with automatic rendering.
///
/// Writes the new value only if it differs from the current one, and emits a
/// render effect exactly when something changed.
///
/// # Example
/// ```ignore
/// update_field!(model.wpm, wpm)
/// ```
#[macro_export]
macro_rules! update_field {
    ($model_field:expr, $value:expr) => {{
        let value = $value;
        if $model_field != value {
            $model_field = value;
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};
}

/// Macro for GET requests expecting a JSON response.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// api_get!("/getconfig", ConfigResponse, "Get config", expect_json: KeyerConfig)
/// ```
#[macro_export]
macro_rules! api_get {
    ($endpoint:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {{
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$response_event(event_result)
            })
    }};
}

/// Macro for POST requests with a JSON body and standard error handling.
///
/// The device endpoints take no authentication; failures are reported back
/// as the `Err` arm of the response event and handled by the update layer.
///
/// # Patterns
///
/// Pattern 1: POST with JSON body expecting a JSON response
/// ```ignore
/// api_post!("/setconfig", ConfigResponse, "Set config",
///     body_json: &request,
///     expect_json: KeyerConfig
/// )
/// ```
///
/// Pattern 2: POST with JSON body, raw string response (shape unspecified)
/// ```ignore
/// api_post!("/textsubmit", TextSubmitResponse, "Submit text",
///     body_json: &request,
///     expect_string
/// )
/// ```
#[macro_export]
macro_rules! api_post {
    // Pattern 1: POST with JSON body expecting a JSON response
    ($endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_json: $response_type:ty) => {{
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(|result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$response_event(event_result)
            }),
            Err(e) => {
                log::error!("Failed to create {} request: {e}", $action);
                crux_core::Command::done()
            }
        }
    }};

    // Pattern 2: POST with JSON body, raw string response
    ($endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_string) => {{
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(|result| {
                let event_result = $crate::process_string_response($action, result);
                $crate::events::Event::$response_event(event_result)
            }),
            Err(e) => {
                log::error!("Failed to create {} request: {e}", $action);
                crux_core::Command::done()
            }
        }
    }};
}
