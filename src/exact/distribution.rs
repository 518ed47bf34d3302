//! Resource distribution from each resource's origin.

use super::RouteOptimizer;
use crate::error::{Result, RoutingError};
use crate::models::{RouteResult, SolveOptions};

/// Outcome of distributing one resource kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// Resource kind.
    pub kind: String,
    /// Location the kind is shipped from, if one holds it.
    pub origin: Option<String>,
    /// Tour from the origin through every other location.
    pub outcome: Result<RouteResult>,
}

impl RouteOptimizer<'_> {
    /// Plans one tour per resource kind, from the kind's origin (see
    /// [`Graph::origin_of`](crate::graph::Graph::origin_of)) through every
    /// other location and back.
    ///
    /// Kinds are planned independently with the same `options`; a failure
    /// for one kind is reported in its [`Distribution`] and does not stop
    /// the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use sea_routing::graph::Graph;
    /// use sea_routing::models::{Location, SolveOptions};
    /// use sea_routing::exact::RouteOptimizer;
    ///
    /// let mut g = Graph::new();
    /// g.add_location(Location::new("Farm").with_endowment("kalo", 100)).unwrap();
    /// g.add_location(Location::new("Village")).unwrap();
    /// g.add_undirected_edge("Farm", "Village", 3.0).unwrap();
    ///
    /// let plans = RouteOptimizer::new(&g).distribute(&["kalo"], &SolveOptions::default());
    /// let route = plans[0].outcome.as_ref().unwrap();
    /// assert_eq!(route.path(), ["Farm", "Village", "Farm"]);
    /// ```
    pub fn distribute<S: AsRef<str>>(&self, kinds: &[S], options: &SolveOptions) -> Vec<Distribution> {
        kinds
            .iter()
            .map(|kind| {
                let kind = kind.as_ref();
                let origin = self.graph().origin_of(kind).map(|l| l.name().to_string());
                let outcome = match &origin {
                    Some(origin) => {
                        let destinations: Vec<&str> = self
                            .graph()
                            .locations()
                            .iter()
                            .map(|l| l.name())
                            .filter(|name| *name != origin.as_str())
                            .collect();
                        self.solve(origin, &destinations, options)
                    }
                    None => Err(RoutingError::InvalidMission {
                        reason: format!("no location holds resource '{}'", kind),
                    }),
                };
                match &outcome {
                    Ok(route) => log::info!("distributing {}: {}", kind, route),
                    Err(e) => log::warn!("cannot distribute {}: {}", kind, e),
                }
                Distribution {
                    kind: kind.to_string(),
                    origin,
                    outcome,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::models::{Demand, Location};

    /// Fully connected sea: two origins, two inhabited islands.
    fn sea() -> Graph {
        let mut g = Graph::new();
        let locs = [
            Location::new("Hawaii").with_population(1500),
            Location::new("Tahiti").with_population(1000),
            Location::new("Ecuador").with_endowment("uala", 100),
            Location::new("Malaysia").with_endowment("kalo", 100),
        ];
        for l in locs {
            g.add_location(l).expect("unique");
        }
        g.add_undirected_edge("Hawaii", "Tahiti", 10.0).expect("valid");
        g.add_undirected_edge("Ecuador", "Hawaii", 20.0).expect("valid");
        g.add_undirected_edge("Ecuador", "Tahiti", 15.0).expect("valid");
        g.add_undirected_edge("Ecuador", "Malaysia", 30.0).expect("valid");
        g.add_undirected_edge("Malaysia", "Tahiti", 15.0).expect("valid");
        g.add_undirected_edge("Malaysia", "Hawaii", 25.0).expect("valid");
        g
    }

    #[test]
    fn test_distribute_each_kind() {
        let g = sea();
        let plans = RouteOptimizer::new(&g).distribute(&["uala", "kalo"], &SolveOptions::default());
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].kind, "uala");
        assert_eq!(plans[0].origin.as_deref(), Some("Ecuador"));
        assert_eq!(plans[1].origin.as_deref(), Some("Malaysia"));
        for plan in &plans {
            let route = plan.outcome.as_ref().expect("connected sea");
            assert_eq!(route.start(), plan.origin.as_deref());
            assert!(route.is_closed());
            for l in g.locations() {
                assert!(route.visits(l.name()));
            }
        }
    }

    #[test]
    fn test_distribute_unknown_kind() {
        let g = sea();
        let plans = RouteOptimizer::new(&g).distribute(&["ulu"], &SolveOptions::default());
        assert_eq!(plans[0].origin, None);
        assert!(matches!(
            plans[0].outcome,
            Err(RoutingError::InvalidMission { .. })
        ));
    }

    #[test]
    fn test_distribute_with_population_tiers() {
        let g = sea();
        let free = RouteOptimizer::new(&g).distribute(&["uala"], &SolveOptions::default());
        let opts = SolveOptions::default()
            .with_capacity(4)
            .with_demand(Demand::PopulationTiers);
        let tight = RouteOptimizer::new(&g).distribute(&["uala"], &opts);
        let free_cost = free[0].outcome.as_ref().expect("feasible").total_cost();
        let tight_cost = tight[0].outcome.as_ref().expect("feasible").total_cost();
        assert!(tight_cost > free_cost);
    }
}
