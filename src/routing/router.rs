//! Route lookup.
//!
//! # Responsibilities
//! - Hold the ordered route table
//! - Look up the endpoint serving a path
//! - Return an explicit no-match rather than a silent default

use super::matcher::PathMatcher;
use crate::dispatch::payload;

/// A static endpoint with a fixed JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Service name, version and environment.
    Welcome,
    /// Liveness probe.
    Health,
}

impl Endpoint {
    /// The JSON body served by this endpoint.
    pub fn body(self) -> String {
        match self {
            Endpoint::Welcome => payload::welcome(),
            Endpoint::Health => payload::health(),
        }
    }

    /// Short label used in logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Welcome => "welcome",
            Endpoint::Health => "health",
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub matcher: PathMatcher,
    pub endpoint: Endpoint,
}

impl Route {
    pub const fn new(path: &'static str, endpoint: Endpoint) -> Self {
        Self {
            matcher: PathMatcher::exact(path),
            endpoint,
        }
    }
}

const ROUTES: &[Route] = &[
    Route::new("/", Endpoint::Welcome),
    Route::new("/api/v1", Endpoint::Welcome),
    Route::new("/api/v1/health", Endpoint::Health),
];

/// Ordered, immutable list of routes.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl RouteTable {
    /// The service's route table.
    pub const STATIC: Self = Self { routes: ROUTES };

    /// Find the first route whose matcher accepts `path`.
    pub fn lookup(&self, path: &str) -> Option<Endpoint> {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .map(|route| route.endpoint)
    }

    /// All routes in match order.
    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::STATIC
    }
}
