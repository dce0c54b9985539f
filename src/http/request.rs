//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) at the edge
//! - Translate the wire request into a `RequestDescriptor`
//!
//! # Design Decisions
//! - Header values that are not visible ASCII are dropped from the descriptor
//! - Repeated headers are joined with `", "`
//! - The body is read up to the configured limit and carried as text; a body
//!   that cannot be read is treated as absent

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::dispatch::{Headers, RequestDescriptor};

/// Header carrying the request ID on both request and response.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request ID set by the edge layer, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Convert an incoming request into a dispatcher descriptor.
pub async fn into_descriptor(request: Request<Body>, max_body_size: usize) -> RequestDescriptor {
    let (parts, body) = request.into_parts();

    let body = match to_bytes(body, max_body_size).await {
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => Some(serde_json::Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        )),
        Err(e) => {
            tracing::debug!(error = %e, "Request body unreadable, dispatching without it");
            None
        }
    };

    RequestDescriptor {
        method: Some(parts.method.as_str().to_string()),
        path: Some(parts.uri.path().to_string()),
        headers: Some(collect_headers(&parts.headers)),
        body,
    }
}

fn collect_headers(headers: &HeaderMap) -> Headers {
    let mut collected = Headers::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    collected
}
