//! Static graph definitions loaded from configuration.

use serde::{Deserialize, Serialize};

use super::Graph;
use crate::error::Result;
use crate::models::Location;

/// One directed edge in a [`GraphDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    pub weight: f64,
    /// Also add the reverse edge with the same weight.
    #[serde(default)]
    pub bidirectional: bool,
}

/// A serializable description of a whole graph.
///
/// Loading goes through [`Graph::add_location`] and [`Graph::add_edge`],
/// so the same validation applies as for hand-built graphs.
///
/// # Examples
///
/// ```
/// use sea_routing::graph::{EdgeDefinition, GraphDefinition};
/// use sea_routing::models::Location;
///
/// let def = GraphDefinition {
///     locations: vec![Location::new("A"), Location::new("B")],
///     edges: vec![EdgeDefinition {
///         from: "A".into(),
///         to: "B".into(),
///         weight: 4.0,
///         bidirectional: true,
///     }],
/// };
/// let graph = def.build().unwrap();
/// assert_eq!(graph.weight("B", "A"), Some(4.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    /// Builds the graph, stopping at the first invalid location or edge.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for location in &self.locations {
            graph.add_location(location.clone())?;
        }
        for edge in &self.edges {
            if edge.bidirectional {
                graph.add_undirected_edge(&edge.from, &edge.to, edge.weight)?;
            } else {
                graph.add_edge(&edge.from, &edge.to, edge.weight)?;
            }
        }
        log::debug!(
            "loaded graph: {} locations, {} edges",
            graph.len(),
            graph.num_edges()
        );
        Ok(graph)
    }
}

impl TryFrom<&GraphDefinition> for Graph {
    type Error = crate::error::RoutingError;

    fn try_from(def: &GraphDefinition) -> Result<Self> {
        def.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;

    const ISLANDS: &str = r#"{
        "locations": [
            { "name": "Hawaii", "population": 1500 },
            { "name": "Tahiti", "population": 1000 },
            { "name": "Ecuador", "endowments": { "uala": 100 } }
        ],
        "edges": [
            { "from": "Hawaii", "to": "Tahiti", "weight": 10, "bidirectional": true },
            { "from": "Ecuador", "to": "Hawaii", "weight": 20 }
        ]
    }"#;

    #[test]
    fn test_build_from_json() {
        let def: GraphDefinition = serde_json::from_str(ISLANDS).expect("valid json");
        let g = def.build().expect("valid graph");
        assert_eq!(g.len(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.weight("Tahiti", "Hawaii"), Some(10.0));
        assert_eq!(g.weight("Hawaii", "Ecuador"), None);
        assert_eq!(g.location("Hawaii").map(Location::population), Some(1500));
        assert_eq!(g.origin_of("uala").map(Location::name), Some("Ecuador"));
    }

    #[test]
    fn test_build_rejects_duplicate() {
        let def = GraphDefinition {
            locations: vec![Location::new("A"), Location::new("A")],
            edges: vec![],
        };
        assert_eq!(
            def.build().err(),
            Some(RoutingError::DuplicateLocation { name: "A".into() })
        );
    }

    #[test]
    fn test_build_rejects_unknown_endpoint() {
        let def = GraphDefinition {
            locations: vec![Location::new("A")],
            edges: vec![EdgeDefinition {
                from: "A".into(),
                to: "B".into(),
                weight: 1.0,
                bidirectional: false,
            }],
        };
        assert!(matches!(
            Graph::try_from(&def),
            Err(RoutingError::UnknownLocation { .. })
        ));
    }
}
