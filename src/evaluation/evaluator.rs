//! Route evaluator that prices a path of location names.

use crate::error::{Result, RoutingError};
use crate::graph::Graph;

/// Computes the travel cost of a location path by summing the weights of
/// consecutive edges.
///
/// # Examples
///
/// ```
/// use sea_routing::graph::Graph;
/// use sea_routing::models::Location;
/// use sea_routing::evaluation::RouteEvaluator;
///
/// let mut g = Graph::new();
/// for n in ["A", "B", "C"] {
///     g.add_location(Location::new(n)).unwrap();
/// }
/// g.add_edge("A", "B", 10.0).unwrap();
/// g.add_edge("B", "C", 8.0).unwrap();
/// g.add_edge("C", "A", 12.0).unwrap();
///
/// let eval = RouteEvaluator::new(&g);
/// assert_eq!(eval.path_cost(&["A", "B", "C", "A"]).unwrap(), 30.0);
/// assert!(eval.path_cost(&["A", "C"]).is_err());
/// ```
pub struct RouteEvaluator<'a> {
    graph: &'a Graph,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator over the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Sum of edge weights along `path`.
    ///
    /// A path of zero or one entries costs nothing. Fails with
    /// [`RoutingError::UnknownLocation`] for a name not in the graph and
    /// [`RoutingError::RouteUnreachable`] for a missing edge.
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Result<f64> {
        let indices = path
            .iter()
            .map(|name| self.graph.require(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.index_path_cost(&indices)
    }

    /// Sum of edge weights along a path of location indices.
    pub fn index_path_cost(&self, path: &[usize]) -> Result<f64> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let weight = self.graph.edge_weight(pair[0], pair[1]).ok_or_else(|| {
                RoutingError::RouteUnreachable {
                    from: self.graph.name_of(pair[0]).to_string(),
                    to: self.graph.name_of(pair[1]).to_string(),
                }
            })?;
            total += weight;
        }
        Ok(total)
    }

    /// Returns `true` if every consecutive pair in `path` is joined by an edge.
    pub fn is_traversable<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.path_cost(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn setup() -> Graph {
        let mut g = Graph::new();
        for n in ["A", "B", "C"] {
            g.add_location(Location::new(n)).expect("unique");
        }
        g.add_undirected_edge("A", "B", 10.0).expect("valid");
        g.add_undirected_edge("B", "C", 8.0).expect("valid");
        g.add_edge("C", "A", 12.0).expect("valid");
        g
    }

    #[test]
    fn test_empty_and_single() {
        let g = setup();
        let eval = RouteEvaluator::new(&g);
        let empty: [&str; 0] = [];
        assert_eq!(eval.path_cost(&empty), Ok(0.0));
        assert_eq!(eval.path_cost(&["B"]), Ok(0.0));
    }

    #[test]
    fn test_closed_tour() {
        let g = setup();
        let eval = RouteEvaluator::new(&g);
        let cost = eval.path_cost(&["A", "B", "C", "A"]).expect("traversable");
        assert!((cost - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_restock_detour() {
        let g = setup();
        let eval = RouteEvaluator::new(&g);
        let cost = eval
            .path_cost(&["A", "B", "A", "B", "C", "A"])
            .expect("traversable");
        assert!((cost - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_edge() {
        let g = setup();
        let eval = RouteEvaluator::new(&g);
        assert_eq!(
            eval.path_cost(&["A", "C"]),
            Err(RoutingError::RouteUnreachable {
                from: "A".into(),
                to: "C".into()
            })
        );
        assert!(!eval.is_traversable(&["A", "C"]));
    }

    #[test]
    fn test_unknown_location() {
        let g = setup();
        let eval = RouteEvaluator::new(&g);
        assert_eq!(
            eval.path_cost(&["A", "Z"]),
            Err(RoutingError::UnknownLocation { name: "Z".into() })
        );
    }
}
