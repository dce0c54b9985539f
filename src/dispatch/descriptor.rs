//! Request and response descriptors.
//!
//! # Responsibilities
//! - Model the normalized request handed over by the hosting runtime
//! - Model the response handed back to it
//! - Apply field defaults (`GET`, `/`, no headers) at the accessor level
//!
//! # Design Decisions
//! - Absent fields stay `None` in the struct; defaults are applied on read
//! - Header maps are ordered so identical descriptors serialize identically
//! - `body` is accepted on requests but never inspected

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::payload;

/// Header mapping used by both descriptors.
pub type Headers = BTreeMap<String, String>;

/// Method assumed when the request does not carry one.
pub const DEFAULT_METHOD: &str = "GET";

/// Path assumed when the request does not carry one.
pub const DEFAULT_PATH: &str = "/";

/// Emitted only if a response descriptor could not be encoded: a 500 carrying
/// the same body the payload encoder falls back to.
pub(crate) const ENCODE_FAILURE_DESCRIPTOR: &str = r#"{"statusCode":500,"headers":{"Content-Type":"application/json"},"body":"{\"success\":false,\"error\":\"Internal Server Error\",\"message\":\"Failed to encode response\"}"}"#;

/// Errors raised while decoding a request descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The payload is not a JSON object of the expected shape.
    #[error("malformed request descriptor: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Normalized request as supplied by the hosting runtime.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RequestDescriptor {
    /// HTTP verb, case-sensitive as supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// URL path without query string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Request headers; names are treated as opaque strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,

    /// Raw body. Carried through, never read by the dispatcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    /// Build a descriptor with an explicit method and path.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            path: Some(path.into()),
            headers: None,
            body: None,
        }
    }

    /// Decode a descriptor from its JSON invocation form.
    pub fn from_json(raw: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Attach a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    /// Attach a raw body.
    pub fn with_body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The request method, or `GET` when absent.
    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_METHOD)
    }

    /// The request path, or `/` when absent.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Number of headers carried, zero when absent.
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map_or(0, BTreeMap::len)
    }
}

/// Normalized response handed back to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: Headers,
    /// UTF-8 body, JSON text or empty.
    pub body: String,
}

impl ResponseDescriptor {
    /// Serialize to the JSON invocation form.
    pub fn to_json(&self) -> String {
        payload::encode_or(self, ENCODE_FAILURE_DESCRIPTOR)
    }

    /// Case-sensitive header lookup on the exact name set by the dispatcher.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let req = RequestDescriptor::from_json("{}").unwrap();
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/");
        assert_eq!(req.header_count(), 0);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let req =
            RequestDescriptor::from_json(r#"{"method":null,"path":null,"headers":null}"#).unwrap();
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/");
    }

    #[test]
    fn test_method_kept_as_supplied() {
        let req = RequestDescriptor::from_json(r#"{"method":"options","path":"/x"}"#).unwrap();
        assert_eq!(req.method(), "options");
        assert_eq!(req.path(), "/x");
    }

    #[test]
    fn test_body_of_any_shape_is_accepted() {
        let req = RequestDescriptor::from_json(r#"{"body":{"a":[1,2]}}"#).unwrap();
        assert!(req.body.is_some());

        let req = RequestDescriptor::from_json(r#"{"body":"raw text"}"#).unwrap();
        assert_eq!(req.body, Some(serde_json::Value::from("raw text")));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = RequestDescriptor::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("malformed request descriptor"));

        assert!(RequestDescriptor::from_json(r#"{"path": 42}"#).is_err());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let req = RequestDescriptor::new("GET", "/").with_header("Content-Type", "text/plain");
        assert_eq!(req.header("content-type"), Some("text/plain"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("text/plain"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn test_response_uses_camel_case_status() {
        let resp = ResponseDescriptor {
            status_code: 404,
            headers: Headers::from([("A".to_string(), "b".to_string())]),
            body: String::new(),
        };
        let json: serde_json::Value = serde_json::from_str(&resp.to_json()).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["headers"]["A"], "b");
        assert_eq!(json["body"], "");
        assert!(json.get("status_code").is_none());
    }

    #[test]
    fn test_encode_failure_descriptor_is_well_formed() {
        let resp: ResponseDescriptor = serde_json::from_str(ENCODE_FAILURE_DESCRIPTOR).unwrap();
        assert_eq!(resp.status_code, 500);
        assert_eq!(resp.header("Content-Type"), Some("application/json"));
        assert_eq!(resp.body, payload::ENCODE_FAILURE_BODY);
    }
}
