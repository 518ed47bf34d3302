//! Location type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A place (island) that can be visited by a route.
///
/// Besides its unique name, a location may carry a population (used to
/// prioritize greedy touring), a resource-cost profile (units of each
/// resource kind needed per visit) and a resource endowment (units of each
/// kind available there, which makes it an origin for that kind).
///
/// # Examples
///
/// ```
/// use sea_routing::models::Location;
///
/// let hawaii = Location::new("Hawaii")
///     .with_population(1500)
///     .with_resource_cost("kalo", 3);
/// assert_eq!(hawaii.name(), "Hawaii");
/// assert_eq!(hawaii.population(), 1500);
/// assert_eq!(hawaii.resource_cost("kalo"), 3);
/// assert_eq!(hawaii.resource_cost("ulu"), 0);
///
/// let ecuador = Location::new("Ecuador").with_endowment("uala", 100);
/// assert!(ecuador.is_origin_of("uala"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    resource_costs: BTreeMap<String, u32>,
    #[serde(default)]
    endowments: BTreeMap<String, u32>,
}

impl Location {
    /// Creates a location with no population, costs or endowments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            population: 0,
            resource_costs: BTreeMap::new(),
            endowments: BTreeMap::new(),
        }
    }

    /// Sets the population.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Sets the units of `kind` required per visit.
    pub fn with_resource_cost(mut self, kind: impl Into<String>, units: u32) -> Self {
        self.resource_costs.insert(kind.into(), units);
        self
    }

    /// Sets the units of `kind` available at this location.
    pub fn with_endowment(mut self, kind: impl Into<String>, units: u32) -> Self {
        self.endowments.insert(kind.into(), units);
        self
    }

    /// Unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Population (0 if unset).
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Units of `kind` required per visit (0 if unset).
    pub fn resource_cost(&self, kind: &str) -> u32 {
        self.resource_costs.get(kind).copied().unwrap_or(0)
    }

    /// Full resource-cost profile.
    pub fn resource_costs(&self) -> &BTreeMap<String, u32> {
        &self.resource_costs
    }

    /// Units of `kind` available here (0 if unset).
    pub fn endowment(&self, kind: &str) -> u32 {
        self.endowments.get(kind).copied().unwrap_or(0)
    }

    /// Full resource endowment.
    pub fn endowments(&self) -> &BTreeMap<String, u32> {
        &self.endowments
    }

    /// Returns `true` if this location holds a positive endowment of `kind`.
    pub fn is_origin_of(&self, kind: &str) -> bool {
        self.endowment(kind) > 0
    }

    /// Units required per visit under the population-tier rule.
    ///
    /// 1500 or more inhabitants need 3 units, 1000 or more need 2,
    /// anything smaller needs 1.
    pub fn tiered_requirement(&self) -> u32 {
        match self.population {
            p if p >= 1500 => 3,
            p if p >= 1000 => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let l = Location::new("Tahiti");
        assert_eq!(l.name(), "Tahiti");
        assert_eq!(l.population(), 0);
        assert!(l.resource_costs().is_empty());
        assert!(l.endowments().is_empty());
    }

    #[test]
    fn test_location_builder() {
        let l = Location::new("Malaysia")
            .with_population(20)
            .with_resource_cost("ulu", 2)
            .with_endowment("kalo", 100);
        assert_eq!(l.population(), 20);
        assert_eq!(l.resource_cost("ulu"), 2);
        assert_eq!(l.endowment("kalo"), 100);
        assert!(l.is_origin_of("kalo"));
        assert!(!l.is_origin_of("ulu"));
    }

    #[test]
    fn test_zero_endowment_is_not_origin() {
        let l = Location::new("Hawaii").with_endowment("ulu", 0);
        assert!(!l.is_origin_of("ulu"));
    }

    #[test]
    fn test_tiered_requirement() {
        assert_eq!(Location::new("a").with_population(1500).tiered_requirement(), 3);
        assert_eq!(Location::new("b").with_population(1499).tiered_requirement(), 2);
        assert_eq!(Location::new("c").with_population(1000).tiered_requirement(), 2);
        assert_eq!(Location::new("d").with_population(600).tiered_requirement(), 1);
        assert_eq!(Location::new("e").tiered_requirement(), 1);
    }

    #[test]
    fn test_location_deserialize_defaults() {
        let l: Location = serde_json::from_str(r#"{"name": "Rapa Nui"}"#).expect("valid json");
        assert_eq!(l, Location::new("Rapa Nui"));
    }
}
