//! Search state and restock bookkeeping for the exact optimizer.

use std::collections::BTreeSet;

/// Most restock round trips a single destination may take.
///
/// Each trip adds two stops to the path, so demand far beyond capacity
/// is rejected up front instead of growing the route without bound.
pub(crate) const MAX_RESTOCK_TRIPS: u32 = 1024;

/// One node of the exact search: where the agent is, which destinations it
/// has served, and how many units it still carries.
///
/// The whole triple is the memoization key: the same `(current, visited)`
/// pair can have a different best continuation under a different residual
/// inventory. `inventory` is `None` when capacity is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SearchState {
    pub current: usize,
    pub visited: BTreeSet<usize>,
    pub inventory: Option<u32>,
}

impl SearchState {
    /// The state at the mission start: nothing served, full inventory.
    pub fn initial(start: usize, capacity: Option<u32>) -> Self {
        Self {
            current: start,
            visited: BTreeSet::new(),
            inventory: capacity,
        }
    }

    /// The state after moving to `next` with `inventory` units left.
    pub fn advance(&self, next: usize, inventory: Option<u32>) -> Self {
        let mut visited = self.visited.clone();
        visited.insert(next);
        Self {
            current: next,
            visited,
            inventory,
        }
    }
}

/// Best continuation from a state: cost and the locations visited after it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Branch {
    pub cost: f64,
    pub path: Vec<usize>,
}

/// How serving a destination affects inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Restock {
    /// Round trips to the start made while serving the destination.
    pub trips: u32,
    /// Units left after serving it.
    pub inventory: Option<u32>,
}

impl Restock {
    /// Serves a destination needing `need` units, arriving with `inventory`.
    ///
    /// Whatever is carried is delivered first; each round trip refills to
    /// `capacity`. Returns `None` when more units are needed but capacity
    /// is zero.
    pub fn serve(need: u32, inventory: Option<u32>, capacity: Option<u32>) -> Option<Self> {
        let carried = match inventory {
            None => {
                return Some(Self {
                    trips: 0,
                    inventory: None,
                })
            }
            Some(carried) => carried,
        };
        if carried >= need {
            return Some(Self {
                trips: 0,
                inventory: Some(carried - need),
            });
        }
        let capacity = capacity.filter(|&c| c > 0)?;
        let shortfall = need - carried;
        let trips = shortfall.div_ceil(capacity);
        // Always below capacity since `trips` is minimal.
        let left = u64::from(carried) + u64::from(trips) * u64::from(capacity) - u64::from(need);
        Some(Self {
            trips,
            inventory: Some(left as u32),
        })
    }

    /// The same visit followed by one more round trip that refills to full.
    ///
    /// Returns `None` when the agent already leaves full or capacity is unbounded.
    pub fn top_up(self, capacity: Option<u32>) -> Option<Self> {
        let capacity = capacity?;
        match self.inventory {
            Some(left) if left < capacity => Some(Self {
                trips: self.trips.saturating_add(1),
                inventory: Some(capacity),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = SearchState::initial(3, Some(10));
        assert_eq!(s.current, 3);
        assert!(s.visited.is_empty());
        assert_eq!(s.inventory, Some(10));
    }

    #[test]
    fn test_advance_leaves_parent_untouched() {
        let s = SearchState::initial(0, None);
        let a = s.advance(2, None);
        let b = a.advance(1, None);
        assert!(s.visited.is_empty());
        assert_eq!(a.visited.len(), 1);
        assert_eq!(b.visited.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_key_includes_inventory() {
        let s = SearchState::initial(0, Some(10));
        assert_ne!(s.advance(1, Some(4)), s.advance(1, Some(5)));
        assert_eq!(s.advance(1, Some(4)), s.advance(1, Some(4)));
    }

    #[test]
    fn test_visited_order_irrelevant() {
        let s = SearchState::initial(0, None);
        let ab = s.advance(1, None).advance(2, None);
        let ba = s.advance(2, None).advance(1, None);
        assert_eq!(ab.visited, ba.visited);
    }

    #[test]
    fn test_serve_unbounded() {
        let r = Restock::serve(50, None, None).expect("always feasible");
        assert_eq!(r.trips, 0);
        assert_eq!(r.inventory, None);
    }

    #[test]
    fn test_serve_without_restock() {
        let r = Restock::serve(6, Some(10), Some(10)).expect("fits");
        assert_eq!(r, Restock { trips: 0, inventory: Some(4) });
    }

    #[test]
    fn test_serve_single_restock() {
        let r = Restock::serve(6, Some(5), Some(5)).expect("restockable");
        assert_eq!(r, Restock { trips: 1, inventory: Some(4) });
    }

    #[test]
    fn test_serve_multiple_restocks() {
        // 1 carried, 11 short, capacity 4: three refills, 1 unit left.
        let r = Restock::serve(12, Some(1), Some(4)).expect("restockable");
        assert_eq!(r, Restock { trips: 3, inventory: Some(1) });
    }

    #[test]
    fn test_serve_exact_fit_after_restock() {
        let r = Restock::serve(10, Some(0), Some(5)).expect("restockable");
        assert_eq!(r, Restock { trips: 2, inventory: Some(0) });
    }

    #[test]
    fn test_top_up() {
        let r = Restock::serve(6, Some(10), Some(10)).expect("fits");
        assert_eq!(
            r.top_up(Some(10)),
            Some(Restock { trips: 1, inventory: Some(10) })
        );
        let r = Restock::serve(6, Some(5), Some(5)).expect("restockable");
        assert_eq!(
            r.top_up(Some(5)),
            Some(Restock { trips: 2, inventory: Some(5) })
        );
    }

    #[test]
    fn test_top_up_when_full_or_unbounded() {
        let r = Restock::serve(0, Some(10), Some(10)).expect("fits");
        assert_eq!(r.top_up(Some(10)), None);
        let r = Restock::serve(3, None, None).expect("unbounded");
        assert_eq!(r.top_up(None), None);
    }

    #[test]
    fn test_serve_zero_capacity() {
        assert!(Restock::serve(1, Some(0), Some(0)).is_none());
        assert_eq!(
            Restock::serve(0, Some(0), Some(0)),
            Some(Restock { trips: 0, inventory: Some(0) })
        );
    }
}
