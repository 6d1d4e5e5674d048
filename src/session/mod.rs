//! Session creation for Managed ChatKit.
//!
//! The endpoint is deployed ahead of its upstream integration: until the
//! session service is wired in, every invocation answers with a fixed
//! 500 and a JSON error explaining that.

use http::StatusCode;

use crate::error::Result;
use crate::models::{ErrorBody, FunctionEvent, FunctionResponse, InvocationContext};

/// Error message returned while the endpoint is unwired.
pub const NOT_WIRED_MESSAGE: &str = "create-session function exists but is not wired yet";

/// Handle a create-session invocation.
///
/// Neither the event nor the context is read: the response is the same
/// for every input.
pub fn create_session(
    _event: &FunctionEvent,
    _context: &InvocationContext,
) -> Result<FunctionResponse> {
    FunctionResponse::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorBody::new(NOT_WIRED_MESSAGE),
    )
}
