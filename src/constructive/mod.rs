//! Constructive heuristics for approximate touring.
//!
//! - [`GreedyPlanner`] — population-priority nearest-neighbor tours, O(n · e) per route

mod nearest_neighbor;

pub use nearest_neighbor::GreedyPlanner;
