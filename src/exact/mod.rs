//! Exact tour search.
//!
//! - [`RouteOptimizer::solve`] — memoized search from a fixed start, with
//!   optional inventory capacity and restock round trips
//! - [`RouteOptimizer::solve_any_start`] — the same search from every
//!   candidate start, keeping the cheapest tour
//! - [`RouteOptimizer::distribute`] — one tour per resource kind from its origin

mod distribution;
mod optimizer;
mod state;

pub use distribution::Distribution;
pub use optimizer::RouteOptimizer;
