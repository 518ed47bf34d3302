//! # sea-routing
//!
//! Closed-tour routing over small sets of locations ("islands") joined by
//! directed, weighted edges, with an optional inventory that must be
//! restocked at the start location.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, RouteResult, SolveOptions, MissionConfig)
//! - [`graph`] — Directed location graph and its serializable definition
//! - [`evaluation`] — Path cost evaluation
//! - [`exact`] — Memoized exact search with restocking (RouteOptimizer)
//! - [`constructive`] — Population-priority greedy touring (GreedyPlanner)
//! - [`error`] — Error taxonomy

pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod graph;
pub mod models;

pub use error::{Result, RoutingError};
