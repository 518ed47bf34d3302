//! Domain model types for island routing.
//!
//! Locations with population and resource profiles, mission options
//! (demand model, inventory capacity, search budget) and the immutable
//! route result returned by every planner.

mod location;
mod mission;
mod route;

pub use location::Location;
pub use mission::{Demand, MissionConfig, ResourceDemand, SearchBudget, SolveOptions};
pub use route::RouteResult;
