//! Route result type.

use std::fmt;

/// A finished tour: total travel cost and the ordered locations visited.
///
/// Exact tours start and end at the mission's start location. Greedy tours
/// may be open-ended when no closing edge exists; `is_closed` reports which.
///
/// # Examples
///
/// ```
/// use sea_routing::models::RouteResult;
///
/// let r = RouteResult::new(30.0, vec!["A".into(), "B".into(), "C".into(), "A".into()], true);
/// assert_eq!(r.start(), Some("A"));
/// assert_eq!(r.num_stops(), 4);
/// assert_eq!(r.to_string(), "A -> B -> C -> A (cost 30)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    total_cost: f64,
    path: Vec<String>,
    closed: bool,
}

impl RouteResult {
    /// Creates a route result.
    pub fn new(total_cost: f64, path: Vec<String>, closed: bool) -> Self {
        Self {
            total_cost,
            path,
            closed,
        }
    }

    /// Sum of the edge weights travelled.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Ordered location names, including the start (and the return to it when closed).
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns `true` if the route returns to its start.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// First location of the route.
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Number of entries in the path (restock returns included).
    pub fn num_stops(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if `name` appears anywhere in the path.
    pub fn visits(&self, name: &str) -> bool {
        self.path.iter().any(|p| p == name)
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {})", self.path.join(" -> "), self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_route_accessors() {
        let r = RouteResult::new(12.5, names(&["A", "B", "A"]), true);
        assert!((r.total_cost() - 12.5).abs() < 1e-10);
        assert_eq!(r.path(), names(&["A", "B", "A"]).as_slice());
        assert!(r.is_closed());
        assert!(r.visits("B"));
        assert!(!r.visits("C"));
    }

    #[test]
    fn test_route_open() {
        let r = RouteResult::new(5.0, names(&["A", "B"]), false);
        assert!(!r.is_closed());
        assert_eq!(r.to_string(), "A -> B (cost 5)");
    }

    #[test]
    fn test_route_empty_path() {
        let r = RouteResult::new(0.0, Vec::new(), true);
        assert_eq!(r.start(), None);
        assert_eq!(r.num_stops(), 0);
    }
}
