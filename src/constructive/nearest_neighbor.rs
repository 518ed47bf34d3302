//! Population-priority nearest-neighbor touring.
//!
//! # Algorithm
//!
//! Candidate starts are ranked by descending population (stable, so equal
//! populations keep graph order). From each start not already covered by
//! an earlier route, walk greedily to the cheapest unvisited neighbor until
//! none is reachable, then close the loop if an edge back to the start
//! exists. The cheapest of these routes is the plan.
//!
//! # Complexity
//!
//! O(n · e) per route where n = locations and e = max out-degree.
//!
//! # Reference
//!
//! The nearest-neighbor tour is the simplest constructive TSP heuristic.
//! It is usually well above optimal but never fails outright: a missing
//! closing edge leaves the route open instead of rejecting it.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::Graph;
use crate::models::{Location, RouteResult};

/// Builds approximate tours over every location of a [`Graph`].
///
/// # Examples
///
/// ```
/// use sea_routing::graph::Graph;
/// use sea_routing::models::Location;
/// use sea_routing::constructive::GreedyPlanner;
///
/// let mut g = Graph::new();
/// g.add_location(Location::new("Tahiti").with_population(300)).unwrap();
/// g.add_location(Location::new("Hawaii").with_population(500)).unwrap();
/// g.add_edge("Hawaii", "Tahiti", 5.0).unwrap();
/// g.add_edge("Tahiti", "Hawaii", 7.0).unwrap();
///
/// let route = GreedyPlanner::new(&g).plan_all().unwrap();
/// assert_eq!(route.path(), ["Hawaii", "Tahiti", "Hawaii"]);
/// assert_eq!(route.total_cost(), 12.0);
/// assert!(route.is_closed());
/// ```
pub struct GreedyPlanner<'a> {
    graph: &'a Graph,
}

impl<'a> GreedyPlanner<'a> {
    /// Creates a planner over the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Locations by descending population; ties keep graph order.
    pub fn rank(&self) -> Vec<&'a Location> {
        let mut ranked: Vec<&Location> = self.graph.locations().iter().collect();
        ranked.sort_by(|a, b| b.population().cmp(&a.population()));
        ranked
    }

    /// Greedy nearest-unvisited-neighbor walk from `start`.
    ///
    /// Ties between equally near neighbors go to the first in adjacency
    /// order. The route is closed if the last location has an edge back to
    /// `start`; otherwise it is returned open and a warning is logged.
    pub fn build_route(&self, start: &str) -> Result<RouteResult> {
        let start = self.graph.require(start)?;
        Ok(self.walk(start))
    }

    /// Every route built while covering the graph, in rank order.
    ///
    /// A ranked location already visited by an earlier route does not get
    /// a route of its own.
    pub fn plan_each(&self) -> Vec<RouteResult> {
        let mut covered = vec![false; self.graph.len()];
        let mut routes = Vec::new();
        for location in self.rank() {
            let Some(idx) = self.graph.index_of(location.name()) else {
                continue;
            };
            if covered[idx] {
                continue;
            }
            let route = self.walk(idx);
            for name in route.path() {
                if let Some(i) = self.graph.index_of(name) {
                    covered[i] = true;
                }
            }
            routes.push(route);
        }
        routes
    }

    /// The cheapest route of [`plan_each`](Self::plan_each); the earliest
    /// in rank order wins ties.
    ///
    /// Returns `None` for an empty graph.
    pub fn plan_all(&self) -> Option<RouteResult> {
        let mut best: Option<RouteResult> = None;
        for route in self.plan_each() {
            if best
                .as_ref()
                .map_or(true, |b| route.total_cost() < b.total_cost())
            {
                best = Some(route);
            }
        }
        if let Some(route) = &best {
            log::debug!(
                "greedy plan from {:?}: {} stops, cost {}",
                route.start(),
                route.num_stops(),
                route.total_cost()
            );
        }
        best
    }

    /// The route of [`plan_each`](Self::plan_each) covering the most distinct
    /// locations, then the cheapest, then the earliest in rank order.
    ///
    /// Unlike [`plan_all`](Self::plan_all), an isolated location's empty
    /// route never beats a route that actually tours the sea.
    pub fn plan_widest(&self) -> Option<RouteResult> {
        let mut best: Option<(usize, RouteResult)> = None;
        for route in self.plan_each() {
            let coverage = route.path().iter().collect::<HashSet<_>>().len();
            let better = match &best {
                None => true,
                Some((c, b)) => {
                    coverage > *c || (coverage == *c && route.total_cost() < b.total_cost())
                }
            };
            if better {
                best = Some((coverage, route));
            }
        }
        best.map(|(_, route)| route)
    }

    fn walk(&self, start: usize) -> RouteResult {
        let n = self.graph.len();
        let mut visited = vec![false; n];
        visited[start] = true;

        let mut route = vec![start];
        let mut total = 0.0;
        let mut current = start;

        while route.len() < n {
            let mut best: Option<(usize, f64)> = None;
            for edge in self.graph.edges(current) {
                if visited[edge.to] {
                    continue;
                }
                if best.map_or(true, |(_, w)| edge.weight < w) {
                    best = Some((edge.to, edge.weight));
                }
            }
            match best {
                Some((next, w)) => {
                    visited[next] = true;
                    route.push(next);
                    total += w;
                    current = next;
                }
                None => break,
            }
        }

        // Never left the start: nothing to close.
        let closed = if route.len() == 1 {
            true
        } else {
            match self.graph.edge_weight(current, start) {
                Some(w) => {
                    total += w;
                    route.push(start);
                    true
                }
                None => {
                    log::warn!(
                        "no edge from '{}' back to '{}'; route left open",
                        self.graph.name_of(current),
                        self.graph.name_of(start)
                    );
                    false
                }
            }
        };

        let path = route
            .iter()
            .map(|&i| self.graph.name_of(i).to_string())
            .collect();
        RouteResult::new(total, path, closed)
    }
}
