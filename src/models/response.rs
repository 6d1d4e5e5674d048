use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::wire::to_body_string;

/// Content type of every JSON response.
pub const APPLICATION_JSON: &str = "application/json";

/// The response object a function returns to the platform.
///
/// Field names serialize as `statusCode`, `headers` and `body`, which is
/// what the platform's HTTP adapter reads back into a real response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResponse {
    /// HTTP status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Response headers, in name order.
    pub headers: BTreeMap<String, String>,
    /// Encoded response body.
    pub body: String,
}

impl FunctionResponse {
    /// Build a JSON response: one `Content-Type` header and `payload` encoded as the body.
    pub fn json<T>(status: StatusCode, payload: &T) -> Result<Self>
    where
        T: ?Sized + Serialize,
    {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), APPLICATION_JSON.to_string());

        Ok(FunctionResponse {
            status_code: status.as_u16(),
            headers,
            body: to_body_string(payload)?,
        })
    }
}

/// JSON error payload: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}
