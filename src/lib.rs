//! ValueCell API request router.
//!
//! A pure dispatcher ([`dispatch::handle`]) maps a normalized request to a
//! normalized response for a handful of static endpoints, with a fixed CORS
//! policy on every response. The remaining modules host it: an Axum server,
//! TOML configuration, tracing and metrics, and signal-driven shutdown.

// Core
pub mod dispatch;
pub mod routing;

// Hosting
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use dispatch::{handle, RequestDescriptor, ResponseDescriptor};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
