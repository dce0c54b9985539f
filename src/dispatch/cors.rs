//! Fixed CORS header policy.
//!
//! Applied to every response the dispatcher builds, preflight and 404 included.
//! Each call hands out a fresh header map; the policy itself is a constant.

use super::descriptor::Headers;

/// `Content-Type` header name as emitted on JSON responses.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Media type of every non-preflight body.
pub const APPLICATION_JSON: &str = "application/json";

/// A constant set of CORS response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy {
    entries: &'static [(&'static str, &'static str)],
}

impl CorsPolicy {
    /// Allow any origin, the common verbs, and the two headers browsers ask about.
    pub const DEFAULT: Self = Self {
        entries: &[
            ("Access-Control-Allow-Origin", "*"),
            (
                "Access-Control-Allow-Methods",
                "GET, POST, OPTIONS, PUT, DELETE",
            ),
            (
                "Access-Control-Allow-Headers",
                "Content-Type, Authorization",
            ),
        ],
    };

    /// The policy's `(name, value)` pairs in emission order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// A new header map holding only the policy headers.
    pub fn headers(&self) -> Headers {
        self.entries
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    /// A new header map holding the policy headers plus `Content-Type: application/json`.
    pub fn json_headers(&self) -> Headers {
        let mut headers = self.headers();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        headers
    }

    /// Returns true if every policy header is present with its exact value.
    pub fn is_applied(&self, headers: &Headers) -> bool {
        self.entries
            .iter()
            .all(|(name, value)| headers.get(*name).is_some_and(|v| v == value))
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
