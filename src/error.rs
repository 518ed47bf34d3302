//! Error taxonomy for graph construction and route search.
//!
//! Construction-time errors (`DuplicateLocation`, `UnknownLocation`,
//! `InvalidWeight`, `InvalidMission`) reject caller configuration outright.
//! Solve-time errors carry the mission context needed to diagnose them.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors raised while building a graph or solving a mission.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// A location with this name was already added.
    DuplicateLocation { name: String },
    /// A referenced location does not exist in the graph.
    UnknownLocation { name: String },
    /// Edge weight is not a finite positive number.
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },
    /// The mission itself is malformed (e.g. start listed as a destination).
    InvalidMission { reason: String },
    /// No ordering of the destinations is connected by edges.
    MissionInfeasible {
        start: String,
        destinations: Vec<String>,
        capacity: Option<u32>,
    },
    /// A destination requires units but the agent can never carry any.
    InsufficientCapacity {
        location: String,
        required: u32,
        capacity: u32,
    },
    /// Every full ordering of the destinations ends without an edge back to start.
    RouteUnreachable { from: String, to: String },
    /// The search explored more states, or ran longer, than its budget allows.
    SearchBudgetExceeded {
        start: String,
        explored_states: usize,
        elapsed_ms: u128,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::DuplicateLocation { name } => {
                write!(f, "Location '{}' already exists", name)
            }
            RoutingError::UnknownLocation { name } => {
                write!(f, "Location '{}' does not exist in the graph", name)
            }
            RoutingError::InvalidWeight { from, to, weight } => write!(
                f,
                "Edge '{}' -> '{}' has invalid weight {}. Must be finite and > 0",
                from, to, weight
            ),
            RoutingError::InvalidMission { reason } => write!(f, "Invalid mission: {}", reason),
            RoutingError::MissionInfeasible {
                start,
                destinations,
                capacity,
            } => write!(
                f,
                "No tour from '{}' visits all of [{}] (capacity: {})",
                start,
                destinations.join(", "),
                capacity.map_or_else(|| "unbounded".to_string(), |c| c.to_string())
            ),
            RoutingError::InsufficientCapacity {
                location,
                required,
                capacity,
            } => write!(
                f,
                "Location '{}' requires {} units but capacity is {}",
                location, required, capacity
            ),
            RoutingError::RouteUnreachable { from, to } => write!(
                f,
                "No closing edge from '{}' back to '{}'",
                from, to
            ),
            RoutingError::SearchBudgetExceeded {
                start,
                explored_states,
                elapsed_ms,
            } => write!(
                f,
                "Search from '{}' exceeded its budget after {} states ({} ms)",
                start, explored_states, elapsed_ms
            ),
        }
    }
}

impl std::error::Error for RoutingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let e = RoutingError::MissionInfeasible {
            start: "A".into(),
            destinations: vec!["B".into(), "C".into()],
            capacity: Some(5),
        };
        let msg = e.to_string();
        assert!(msg.contains("'A'"));
        assert!(msg.contains("B, C"));
        assert!(msg.contains("capacity: 5"));
    }

    #[test]
    fn test_display_unbounded_capacity() {
        let e = RoutingError::MissionInfeasible {
            start: "A".into(),
            destinations: vec![],
            capacity: None,
        };
        assert!(e.to_string().contains("unbounded"));
    }

    #[test]
    fn test_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(RoutingError::UnknownLocation {
            name: "Atlantis".into(),
        });
        assert!(e.to_string().contains("Atlantis"));
    }
}
