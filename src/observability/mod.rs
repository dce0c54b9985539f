//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http::server (per request)
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - The dispatcher itself never logs; the HTTP layer logs around it
//! - Request ID generated at the edge flows into every request log line
//! - Metrics exporter is off by default

pub mod logging;
pub mod metrics;
