//! Request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! RequestDescriptor (method, path, headers, body)
//!     → dispatcher.rs (preflight check, route lookup)
//!     → cors.rs (fixed CORS header set, plus Content-Type for JSON)
//!     → payload.rs (JSON envelope for the matched endpoint or the 404)
//!     → ResponseDescriptor (statusCode, headers, body)
//! ```
//!
//! The whole subsystem is synchronous and side-effect free, so the hosting
//! runtime may call [`handle`] from any number of tasks at once.

pub mod cors;
pub mod descriptor;
pub mod dispatcher;
pub mod payload;

pub use cors::CorsPolicy;
pub use descriptor::{DescriptorError, Headers, RequestDescriptor, ResponseDescriptor};
pub use dispatcher::{handle, render, resolve, Resolution};

/// Decode a JSON request descriptor and dispatch it.
///
/// This is the serverless invocation contract end to end: only the decoding
/// step can fail, dispatch itself is total.
pub fn invoke(raw: &str) -> Result<ResponseDescriptor, DescriptorError> {
    let request = RequestDescriptor::from_json(raw)?;
    Ok(handle(&request))
}
