//! HTTP helper functions for the Crux Core
//!
//! Common response handling shared by the request macros, kept as plain
//! functions so they stay debuggable and testable.

use crux_http::Response;

/// Base URL for the keyer device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// making them relative to the page the device served.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use keyer_ui_core::http_helpers::build_url;
/// let url = build_url("/getconfig");
/// assert_eq!(url, "https://relative/getconfig");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) => {
            if body.is_empty() {
                format!("{action} failed: HTTP {status} (Empty body)")
            } else {
                match String::from_utf8(body) {
                    Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
                    Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
                }
            }
        }
        None => format!("{action} failed: HTTP {status} (No body)"),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Extract string body from response.
///
/// For endpoints whose response shape is unspecified and only logged.
pub fn extract_string_response(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<String, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(bytes) => {
            String::from_utf8(bytes).map_err(|_| format!("{action}: Invalid UTF-8 in response"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(e.to_string()),
    }
}

/// Process HTTP response result and extract the raw string body
pub fn process_string_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<String, String> {
    match result {
        Ok(mut response) => extract_string_response(action, &mut response),
        Err(e) => Err(e.to_string()),
    }
}

// Note: Unit tests for these helpers are not included because crux_http::Response
// has a private constructor. They are exercised through the update tests that
// drive the request macros.
