//! Mission parameters: resource demand, capacity and search budget.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Location;

/// Units of inventory a visit to a location consumes.
///
/// Implemented by [`Demand`] and by any `Fn(&Location) -> u32` closure.
pub trait ResourceDemand: Send + Sync {
    /// Units required to serve `location` once.
    fn units(&self, location: &Location) -> u32;
}

impl<F> ResourceDemand for F
where
    F: Fn(&Location) -> u32 + Send + Sync,
{
    fn units(&self, location: &Location) -> u32 {
        self(location)
    }
}

/// Built-in per-location demand models.
///
/// # Examples
///
/// ```
/// use sea_routing::models::{Demand, Location, ResourceDemand};
///
/// let tahiti = Location::new("Tahiti").with_population(1000).with_resource_cost("ulu", 4);
/// assert_eq!(Demand::Unconstrained.units(&tahiti), 0);
/// assert_eq!(Demand::Resource("ulu".into()).units(&tahiti), 4);
/// assert_eq!(Demand::PopulationTiers.units(&tahiti), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Demand {
    /// Every visit is free.
    #[default]
    Unconstrained,
    /// The location's resource-cost profile entry for this kind.
    Resource(String),
    /// 3 / 2 / 1 units by population tier, see [`Location::tiered_requirement`].
    PopulationTiers,
}

impl ResourceDemand for Demand {
    fn units(&self, location: &Location) -> u32 {
        match self {
            Demand::Unconstrained => 0,
            Demand::Resource(kind) => location.resource_cost(kind),
            Demand::PopulationTiers => location.tiered_requirement(),
        }
    }
}

/// Limits on how much work one exact search may do.
///
/// Unlimited by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    #[serde(default)]
    max_states: Option<usize>,
    #[serde(default)]
    time_limit_ms: Option<u64>,
}

impl SearchBudget {
    /// Caps the number of distinct search states expanded.
    pub fn with_max_states(mut self, max: usize) -> Self {
        self.max_states = Some(max);
        self
    }

    /// Caps the wall-clock time of a single search.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(limit.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    /// Maximum number of states, if limited.
    pub fn max_states(&self) -> Option<usize> {
        self.max_states
    }

    /// Time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// Options for an exact solve.
///
/// Defaults to unconstrained: zero demand everywhere, unbounded capacity
/// and no search budget, which reduces the search to a plain TSP.
///
/// # Examples
///
/// ```
/// use sea_routing::models::{Demand, SolveOptions};
///
/// let opts = SolveOptions::default()
///     .with_capacity(10)
///     .with_demand(Demand::PopulationTiers);
/// assert_eq!(opts.capacity(), Some(10));
/// ```
#[derive(Clone)]
pub struct SolveOptions {
    demand: Arc<dyn ResourceDemand>,
    capacity: Option<u32>,
    budget: SearchBudget,
}

impl SolveOptions {
    /// Sets the inventory capacity (units carried when full).
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the per-location demand function.
    pub fn with_demand<D: ResourceDemand + 'static>(mut self, demand: D) -> Self {
        self.demand = Arc::new(demand);
        self
    }

    /// Sets the search budget.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Inventory capacity; `None` means unbounded.
    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    /// Search budget.
    pub fn budget(&self) -> SearchBudget {
        self.budget
    }

    /// Units required to visit `location` once.
    pub fn demand_of(&self, location: &Location) -> u32 {
        self.demand.units(location)
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            demand: Arc::new(Demand::Unconstrained),
            capacity: None,
            budget: SearchBudget::default(),
        }
    }
}

impl fmt::Debug for SolveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolveOptions")
            .field("capacity", &self.capacity)
            .field("budget", &self.budget)
            .finish_non_exhaustive()
    }
}

/// A mission as read from static configuration.
///
/// Without a `start`, every location not among the destinations is tried
/// as the start and the cheapest tour wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub demand: Demand,
    #[serde(default)]
    pub budget: SearchBudget,
}

impl MissionConfig {
    /// Builds the solve options this mission describes.
    pub fn options(&self) -> SolveOptions {
        let mut opts = SolveOptions::default()
            .with_demand(self.demand.clone())
            .with_budget(self.budget);
        opts.capacity = self.capacity;
        opts
    }
}
