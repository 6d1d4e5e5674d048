use thiserror::Error;

/// Errors raised while building or converting a function response.
///
/// None of these are user-visible: the handler's only output is a
/// response object. They surface at the runtime boundary, where the
/// function binary converts them into `vercel_runtime::Error`.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// The response payload could not be encoded as JSON.
    #[error("failed to encode response body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The encoder produced bytes that are not valid UTF-8.
    #[error("response body is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The status code is outside the valid HTTP range.
    #[error("invalid status code {0}")]
    InvalidStatus(u16),

    /// The HTTP response could not be assembled (bad header name or value).
    #[error("failed to build http response: {0}")]
    Http(#[from] http::Error),
}

pub type Result<T, E = FunctionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_status_message_names_the_code() {
        let err = FunctionError::InvalidStatus(1000);
        assert_eq!(err.to_string(), "invalid status code 1000");
    }

    #[test]
    fn test_encode_error_converts_from_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FunctionError = source.into();
        assert!(
            err.to_string().starts_with("failed to encode response body"),
            "unexpected message: {err}"
        );
    }
}
