//! JSON bodies returned by the dispatcher.

use serde::{Deserialize, Serialize};

/// Service name reported on the welcome route.
pub const SERVICE_NAME: &str = "ValueCell";

/// API version reported on the welcome route.
pub const SERVICE_VERSION: &str = "0.1.0";

/// Deployment environment reported on the welcome route.
pub const SERVICE_ENVIRONMENT: &str = "vercel";

/// Emitted only if a body could not be encoded.
pub(crate) const ENCODE_FAILURE_BODY: &str =
    r#"{"success":false,"error":"Internal Server Error","message":"Failed to encode response"}"#;

/// Successful envelope: `{"success": true, "data": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Success<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> Success<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Failure envelope: `{"success": false, "error": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl Failure {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Body of `/` and `/api/v1`.
pub fn welcome() -> String {
    encode(&Success::new(
        ServiceInfo {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            environment: SERVICE_ENVIRONMENT.to_string(),
        },
        "Welcome to ValueCell API",
    ))
}

/// Body of `/api/v1/health`.
pub fn health() -> String {
    encode(&Success::new(
        HealthStatus {
            status: "healthy".to_string(),
        },
        "Service is running",
    ))
}

/// Body of every unmatched path. The path is interpolated verbatim.
pub fn not_found(path: &str) -> String {
    encode(&Failure::new(
        "Not Found",
        format!("Endpoint {path} not found"),
    ))
}

fn encode<T: Serialize>(body: &T) -> String {
    encode_or(body, ENCODE_FAILURE_BODY)
}

/// Serialize `value`, substituting the fixed `fallback` document on failure.
pub(crate) fn encode_or<T: Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}
