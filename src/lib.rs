//! Managed ChatKit Functions: shared library
//!
//! This crate contains the response model, the platform adapter and
//! the handlers used by the serverless functions in `api/`.
//!
//! Each function binary imports from this library to keep the
//! entry points thin and the handlers testable without a runtime.

pub mod error;
pub mod models;
pub mod platform;
pub mod session;
pub mod telemetry;
pub mod wire;

pub use error::FunctionError;

/// Crate version, reported in the invocation context.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Crate name, reported as the function name in the invocation context.
pub fn function_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
