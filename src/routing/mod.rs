//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → router.rs (ordered scan of the static route table)
//!     → matcher.rs (exact path comparison)
//!     → Return: matched Endpoint or None
//! ```
//!
//! # Design Decisions
//! - Table is a compile-time constant, never mutated at runtime
//! - Exact, case-sensitive comparison; no prefixes, no parameters
//! - First match wins (table order)

pub mod matcher;
pub mod router;

pub use matcher::PathMatcher;
pub use router::{Endpoint, Route, RouteTable};
