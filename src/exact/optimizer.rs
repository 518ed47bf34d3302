//! Exact closed-tour search with inventory restocking.
//!
//! # Algorithm
//!
//! Depth-first search over orderings of the destination set, memoized on
//! the state `(current, visited, inventory)`:
//!
//! ```text
//! best(s) = min over unvisited destinations n adjacent to s.current of
//!           w(s.current, n) + trips(n) * (w(n, S) + w(S, n)) + best(s')
//! best(s) = w(s.current, S)                       when every destination is visited
//! ```
//!
//! `trips(n)` is the number of restock round trips to the start `S` made at
//! `n`: the fewest that cover its demand given the inventory carried on
//! arrival, or one more that leaves `n` with a full load. Topping up early
//! at a destination close to `S` can be cheaper than running dry far away.
//! Without a capacity no trips are ever made and the search is a plain
//! memoized TSP.
//!
//! Ties keep the first candidate in adjacency order, so results are
//! deterministic.
//!
//! # Complexity
//!
//! O(2^d · d · c) states for d destinations and c distinct inventory levels.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Instant;

use super::state::{Branch, Restock, SearchState, MAX_RESTOCK_TRIPS};
use crate::error::{Result, RoutingError};
use crate::graph::Graph;
use crate::models::{MissionConfig, RouteResult, SearchBudget, SolveOptions};

/// Finds minimum-cost closed tours over a [`Graph`].
///
/// Each call to [`solve`](Self::solve) owns a fresh memo table, so one
/// optimizer (or one graph) can be shared across independent missions.
///
/// # Examples
///
/// ```
/// use sea_routing::graph::Graph;
/// use sea_routing::models::{Location, SolveOptions};
/// use sea_routing::exact::RouteOptimizer;
///
/// let mut g = Graph::new();
/// for n in ["A", "B", "C"] {
///     g.add_location(Location::new(n)).unwrap();
/// }
/// g.add_undirected_edge("A", "B", 10.0).unwrap();
/// g.add_undirected_edge("B", "C", 8.0).unwrap();
/// g.add_undirected_edge("C", "A", 12.0).unwrap();
///
/// let route = RouteOptimizer::new(&g)
///     .solve("A", &["B", "C"], &SolveOptions::default())
///     .unwrap();
/// assert_eq!(route.total_cost(), 30.0);
/// assert_eq!(route.path(), ["A", "B", "C", "A"]);
/// ```
pub struct RouteOptimizer<'a> {
    graph: &'a Graph,
}

impl<'a> RouteOptimizer<'a> {
    /// Creates an optimizer over the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Finds the cheapest tour from `start` that serves every destination
    /// exactly once and returns to `start`.
    ///
    /// Restock detours appear in the path as `N -> start -> N`.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::UnknownLocation`] for a start or destination not in the graph
    /// - [`RoutingError::InvalidMission`] if `start` is a destination or a destination repeats
    /// - [`RoutingError::InsufficientCapacity`] if a destination needs units and capacity is 0,
    ///   or would need more than 1024 restock trips
    /// - [`RoutingError::RouteUnreachable`] if destinations can all be reached but never closed
    /// - [`RoutingError::MissionInfeasible`] if no ordering reaches every destination
    /// - [`RoutingError::SearchBudgetExceeded`] if the budget in `options` runs out
    pub fn solve<S: AsRef<str>>(
        &self,
        start: &str,
        destinations: &[S],
        options: &SolveOptions,
    ) -> Result<RouteResult> {
        let start_idx = self.graph.require(start)?;
        let targets = self.targets(start_idx, destinations)?;
        let demand = self.demand(&targets, options)?;

        if targets.is_empty() {
            return Ok(RouteResult::new(0.0, vec![start.to_string()], true));
        }

        log::debug!(
            "solving from '{}' over {} destinations (capacity: {:?})",
            start,
            targets.len(),
            options.capacity()
        );

        let mut search = Search {
            graph: self.graph,
            start: start_idx,
            targets: &targets,
            demand: &demand,
            capacity: options.capacity(),
            budget: options.budget(),
            started: Instant::now(),
            memo: HashMap::new(),
            expanded: 0,
            unclosed: None,
        };
        let initial = SearchState::initial(start_idx, options.capacity());
        let best = search.explore(&initial)?;

        log::debug!(
            "search from '{}' explored {} states in {:?}",
            start,
            search.expanded,
            search.started.elapsed()
        );

        match best {
            Some(branch) => {
                let mut path = Vec::with_capacity(branch.path.len() + 1);
                path.push(start.to_string());
                path.extend(
                    branch
                        .path
                        .iter()
                        .map(|&i| self.graph.name_of(i).to_string()),
                );
                Ok(RouteResult::new(branch.cost, path, true))
            }
            None => match search.unclosed {
                Some(last) => Err(RoutingError::RouteUnreachable {
                    from: self.graph.name_of(last).to_string(),
                    to: start.to_string(),
                }),
                None => Err(RoutingError::MissionInfeasible {
                    start: start.to_string(),
                    destinations: destinations.iter().map(|d| d.as_ref().to_string()).collect(),
                    capacity: options.capacity(),
                }),
            },
        }
    }

    /// Tries every location outside `destinations` as the start, in graph
    /// order, and keeps the cheapest tour (first one on ties).
    ///
    /// Starts that cannot complete a tour are skipped. If none can, the
    /// error of the last one tried is returned.
    pub fn solve_any_start<S: AsRef<str>>(
        &self,
        destinations: &[S],
        options: &SolveOptions,
    ) -> Result<RouteResult> {
        let excluded = destinations
            .iter()
            .map(|d| self.graph.require(d.as_ref()))
            .collect::<Result<HashSet<_>>>()?;

        let mut best: Option<RouteResult> = None;
        let mut last_err = None;
        for (idx, location) in self.graph.locations().iter().enumerate() {
            if excluded.contains(&idx) {
                continue;
            }
            match self.solve(location.name(), destinations, options) {
                Ok(route) => {
                    if best
                        .as_ref()
                        .map_or(true, |b| route.total_cost() < b.total_cost())
                    {
                        best = Some(route);
                    }
                }
                Err(e @ RoutingError::MissionInfeasible { .. })
                | Err(e @ RoutingError::RouteUnreachable { .. }) => {
                    log::debug!("start '{}' skipped: {}", location.name(), e);
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        match (best, last_err) {
            (Some(route), _) => Ok(route),
            (None, Some(e)) => Err(e),
            (None, None) => Err(RoutingError::InvalidMission {
                reason: "no location outside the destination set can start the tour".into(),
            }),
        }
    }

    /// Solves a mission read from configuration.
    pub fn solve_mission(&self, mission: &MissionConfig) -> Result<RouteResult> {
        let options = mission.options();
        match &mission.start {
            Some(start) => self.solve(start, &mission.destinations, &options),
            None => self.solve_any_start(&mission.destinations, &options),
        }
    }

    fn targets<S: AsRef<str>>(&self, start: usize, destinations: &[S]) -> Result<BTreeSet<usize>> {
        let mut targets = BTreeSet::new();
        for d in destinations {
            let idx = self.graph.require(d.as_ref())?;
            if idx == start {
                return Err(RoutingError::InvalidMission {
                    reason: format!("start '{}' is also listed as a destination", d.as_ref()),
                });
            }
            if !targets.insert(idx) {
                return Err(RoutingError::InvalidMission {
                    reason: format!("destination '{}' is listed more than once", d.as_ref()),
                });
            }
        }
        Ok(targets)
    }

    /// Units needed per location index; destinations only.
    ///
    /// Rejects a destination that no bounded number of restocks can serve.
    fn demand(&self, targets: &BTreeSet<usize>, options: &SolveOptions) -> Result<Vec<u32>> {
        let mut demand = vec![0; self.graph.len()];
        for &t in targets {
            let location = self.graph.location_at(t);
            let need = options.demand_of(location);
            if let Some(capacity) = options.capacity() {
                let too_many = capacity == 0 || need.div_ceil(capacity) > MAX_RESTOCK_TRIPS;
                if need > 0 && too_many {
                    return Err(RoutingError::InsufficientCapacity {
                        location: location.name().to_string(),
                        required: need,
                        capacity,
                    });
                }
            }
            demand[t] = need;
        }
        Ok(demand)
    }
}

/// Working state of one solve call. Dropped when the call returns.
struct Search<'a> {
    graph: &'a Graph,
    start: usize,
    targets: &'a BTreeSet<usize>,
    demand: &'a [u32],
    capacity: Option<u32>,
    budget: SearchBudget,
    started: Instant,
    memo: HashMap<SearchState, Option<Branch>>,
    expanded: usize,
    /// A location where a complete ordering ended with no edge back to start.
    unclosed: Option<usize>,
}

impl Search<'_> {
    fn explore(&mut self, state: &SearchState) -> Result<Option<Branch>> {
        if state.visited.len() == self.targets.len() {
            return Ok(match self.graph.edge_weight(state.current, self.start) {
                Some(w) => Some(Branch {
                    cost: w,
                    path: vec![self.start],
                }),
                None => {
                    self.unclosed.get_or_insert(state.current);
                    None
                }
            });
        }

        if let Some(hit) = self.memo.get(state) {
            return Ok(hit.clone());
        }
        self.check_budget()?;
        self.expanded += 1;

        let graph = self.graph;
        let mut best: Option<Branch> = None;
        for edge in graph.edges(state.current) {
            let next = edge.to;
            if !self.targets.contains(&next) || state.visited.contains(&next) {
                continue;
            }
            let Some(minimal) = Restock::serve(self.demand[next], state.inventory, self.capacity)
            else {
                continue;
            };
            // Minimal restocking first, so it wins ties against topping up.
            for restock in [Some(minimal), minimal.top_up(self.capacity)]
                .into_iter()
                .flatten()
            {
                let detour = if restock.trips > 0 {
                    self.check_budget()?;
                    match self.round_trip(next) {
                        Some(w) => f64::from(restock.trips) * w,
                        None => continue,
                    }
                } else {
                    0.0
                };

                let child = state.advance(next, restock.inventory);
                let Some(rest) = self.explore(&child)? else {
                    continue;
                };

                let cost = edge.weight + detour + rest.cost;
                if best.as_ref().map_or(true, |b| cost < b.cost) {
                    let mut path =
                        Vec::with_capacity(1 + 2 * restock.trips as usize + rest.path.len());
                    path.push(next);
                    for _ in 0..restock.trips {
                        path.push(self.start);
                        path.push(next);
                    }
                    path.extend_from_slice(&rest.path);
                    best = Some(Branch { cost, path });
                }
            }
        }

        self.memo.insert(state.clone(), best.clone());
        Ok(best)
    }

    /// Cost of `at -> start -> at`, if both edges exist.
    fn round_trip(&self, at: usize) -> Option<f64> {
        Some(self.graph.edge_weight(at, self.start)? + self.graph.edge_weight(self.start, at)?)
    }

    fn check_budget(&self) -> Result<()> {
        let over_states = self
            .budget
            .max_states()
            .is_some_and(|max| self.expanded >= max);
        let over_time = self
            .budget
            .time_limit()
            .is_some_and(|limit| self.started.elapsed() >= limit);
        if over_states || over_time {
            return Err(RoutingError::SearchBudgetExceeded {
                start: self.graph.name_of(self.start).to_string(),
                explored_states: self.expanded,
                elapsed_ms: self.started.elapsed().as_millis(),
            });
        }
        Ok(())
    }
}
