use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The platform representation of an incoming HTTP request.
///
/// Every field defaults, so any JSON object (including `{}`) is a valid event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionEvent {
    /// HTTP method, upper case (e.g., "POST").
    pub http_method: String,
    /// Request path (e.g., "/api/create-session").
    pub path: String,
    /// Request headers. Names are lower case when built from a request.
    /// Repeated headers keep the last value; see `multi_value_headers`.
    pub headers: BTreeMap<String, String>,
    /// Every value of every header, in arrival order.
    pub multi_value_headers: BTreeMap<String, Vec<String>>,
    /// Decoded query string parameters. Repeated keys keep the last value.
    pub query_string_parameters: BTreeMap<String, String>,
    /// Raw request body, `None` when the request had none.
    pub body: Option<String>,
    /// True when `body` holds base64 of a binary payload.
    pub is_base64_encoded: bool,
}
