//! Platform-facing data model for serverless functions.
//!
//! These types follow the HTTP-adapter convention: a function receives an
//! event and an invocation context, and returns a response object.

pub mod context;
pub mod event;
pub mod response;

pub use context::InvocationContext;
pub use event::FunctionEvent;
pub use response::{ErrorBody, FunctionResponse};
