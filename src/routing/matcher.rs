//! Route matching logic.
//!
//! # Design Decisions
//! - Path matching is exact and case-sensitive
//! - No trailing-slash folding, percent-decoding or query stripping here;
//!   the caller hands over the path as received

/// Matches a single literal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMatcher {
    path: &'static str,
}

impl PathMatcher {
    /// Create a matcher for exactly `path`.
    pub const fn exact(path: &'static str) -> Self {
        Self { path }
    }

    /// The literal path this matcher accepts.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns true if `path` is byte-for-byte the configured path.
    pub fn matches(&self, path: &str) -> bool {
        self.path == path
    }
}
