//! Response transformation.
//!
//! Writes a `ResponseDescriptor` onto an axum response. A status code outside
//! the valid range becomes 500; header entries that are not valid HTTP are
//! skipped and logged.
//!
//! Responses built by middleware rather than the dispatcher get the CORS
//! policy filled in by [`with_cors`].

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::Response;

use crate::dispatch::{CorsPolicy, ResponseDescriptor};

/// Convert a dispatcher response into a wire response.
pub fn into_response(descriptor: ResponseDescriptor) -> Response {
    let status = StatusCode::from_u16(descriptor.status_code).unwrap_or_else(|_| {
        tracing::warn!(
            status = descriptor.status_code,
            "Invalid status code from dispatcher"
        );
        StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut response = Response::new(Body::from(descriptor.body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (name, value) in descriptor.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Skipping invalid response header"),
        }
    }

    response
}

/// Add any CORS policy header the response is missing. Existing values are kept.
pub fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for &(name, value) in CorsPolicy::DEFAULT.entries() {
        let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
            continue;
        };
        if !headers.contains_key(&name) {
            headers.insert(name, HeaderValue::from_static(value));
        }
    }
    response
}
