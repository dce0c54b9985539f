//! Request dispatch.
//!
//! # Responsibilities
//! - Short-circuit CORS preflight
//! - Resolve the path against the route table
//! - Render the response descriptor with the CORS policy applied
//!
//! # Design Decisions
//! - Total: every input yields a well-formed response, unmatched paths are 404s
//! - Pure: no I/O, no logging, no shared state
//! - Preflight is checked before any path matching

use super::cors::CorsPolicy;
use super::descriptor::{RequestDescriptor, ResponseDescriptor};
use super::payload;
use crate::routing::{Endpoint, RouteTable};

/// Method that triggers the preflight short-circuit. Compared case-sensitively.
pub const PREFLIGHT_METHOD: &str = "OPTIONS";

/// Outcome of matching a request, before any body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// CORS preflight.
    Preflight,
    /// A route in the table.
    Endpoint(Endpoint),
    /// No route matched.
    NotFound,
}

impl Resolution {
    /// Short label used in logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Preflight => "preflight",
            Resolution::Endpoint(endpoint) => endpoint.name(),
            Resolution::NotFound => "not_found",
        }
    }

    /// Status code the resolution renders with.
    pub fn status_code(self) -> u16 {
        match self {
            Resolution::Preflight | Resolution::Endpoint(_) => 200,
            Resolution::NotFound => 404,
        }
    }
}

/// Match a request without building a response.
pub fn resolve(request: &RequestDescriptor) -> Resolution {
    if request.method() == PREFLIGHT_METHOD {
        return Resolution::Preflight;
    }

    match RouteTable::STATIC.lookup(request.path()) {
        Some(endpoint) => Resolution::Endpoint(endpoint),
        None => Resolution::NotFound,
    }
}

/// Handle one request.
pub fn handle(request: &RequestDescriptor) -> ResponseDescriptor {
    render(request, resolve(request))
}

/// Build the response for an already resolved request.
pub fn render(request: &RequestDescriptor, resolution: Resolution) -> ResponseDescriptor {
    let cors = CorsPolicy::DEFAULT;

    let (headers, body) = match resolution {
        Resolution::Preflight => (cors.headers(), String::new()),
        Resolution::Endpoint(endpoint) => (cors.json_headers(), endpoint.body()),
        Resolution::NotFound => (cors.json_headers(), payload::not_found(request.path())),
    };

    ResponseDescriptor {
        status_code: resolution.status_code(),
        headers,
        body,
    }
}
