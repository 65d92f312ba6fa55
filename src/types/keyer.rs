use serde::{Deserialize, Serialize};

/// `/textsubmit` request body
///
/// The response shape is unspecified by the device; it is logged and
/// otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextSubmitRequest {
    pub text: String,
}
