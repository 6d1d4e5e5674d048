use serde::{Deserialize, Serialize};

/// Runtime metadata for a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvocationContext {
    /// Name of the deployed function.
    pub function_name: String,
    /// Version of the deployed function.
    pub function_version: String,
    /// Platform request id. Empty when the platform did not supply one.
    pub aws_request_id: String,
}

impl InvocationContext {
    /// Context for the current build of this crate.
    pub fn for_request(request_id: impl Into<String>) -> Self {
        InvocationContext {
            function_name: crate::function_name().to_string(),
            function_version: crate::version().to_string(),
            aws_request_id: request_id.into(),
        }
    }
}
