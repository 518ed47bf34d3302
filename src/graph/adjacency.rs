//! Directed weighted location graph.

use std::collections::HashMap;

use crate::error::{Result, RoutingError};
use crate::models::Location;

/// A directed edge to `to` with travel cost `weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the target location.
    pub to: usize,
    /// Travel cost, always finite and positive.
    pub weight: f64,
}

/// A set of named locations joined by directed, weighted edges.
///
/// Locations are stored in insertion order and addressed internally by
/// index. Each location's outgoing edges keep their insertion order, which
/// is the tie-break order used by every planner in this crate.
///
/// # Examples
///
/// ```
/// use sea_routing::graph::Graph;
/// use sea_routing::models::Location;
///
/// let mut g = Graph::new();
/// g.add_location(Location::new("A")).unwrap();
/// g.add_location(Location::new("B")).unwrap();
/// g.add_edge("A", "B", 10.0).unwrap();
///
/// assert_eq!(g.len(), 2);
/// assert_eq!(g.weight("A", "B"), Some(10.0));
/// assert_eq!(g.weight("B", "A"), None); // directed
/// assert!(g.add_edge("A", "Z", 1.0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location, returning its index.
    ///
    /// Fails with [`RoutingError::DuplicateLocation`] if the name is taken.
    pub fn add_location(&mut self, location: Location) -> Result<usize> {
        if self.index.contains_key(location.name()) {
            return Err(RoutingError::DuplicateLocation {
                name: location.name().to_string(),
            });
        }
        let idx = self.locations.len();
        self.index.insert(location.name().to_string(), idx);
        self.locations.push(location);
        self.adjacency.push(Vec::new());
        Ok(idx)
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// Adding an edge that already exists replaces its weight and keeps its
    /// original position in the adjacency order.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let f = self.require(from)?;
        let t = self.require(to)?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RoutingError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        let edges = &mut self.adjacency[f];
        match edges.iter_mut().find(|e| e.to == t) {
            Some(existing) => existing.weight = weight,
            None => edges.push(Edge { to: t, weight }),
        }
        Ok(())
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Outgoing `(neighbor, weight)` pairs of `name`, in insertion order.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, f64)>> {
        let idx = self.require(name)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|e| (self.locations[e.to].name(), e.weight))
            .collect())
    }

    /// Outgoing edges of the location at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn edges(&self, idx: usize) -> &[Edge] {
        &self.adjacency[idx]
    }

    /// Weight of the edge between two indices, if present.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Weight of the edge between two named locations, if both exist and are joined.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.edge_weight(self.index_of(from)?, self.index_of(to)?)
    }

    /// Index of the named location.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Index of the named location, or [`RoutingError::UnknownLocation`].
    pub fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| RoutingError::UnknownLocation {
                name: name.to_string(),
            })
    }

    /// The named location.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.index_of(name).map(|i| &self.locations[i])
    }

    /// The location at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn location_at(&self, idx: usize) -> &Location {
        &self.locations[idx]
    }

    /// Name of the location at `idx`.
    pub fn name_of(&self, idx: usize) -> &str {
        self.locations[idx].name()
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// First location (in insertion order) holding a positive endowment of `kind`.
    pub fn origin_of(&self, kind: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.is_origin_of(kind))
    }
}
