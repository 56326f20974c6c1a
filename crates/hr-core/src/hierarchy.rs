//! Manager-hierarchy guard
//!
//! The line-manager relationship over employees is intended to form a
//! forest. This module validates a proposed manager assignment against the
//! current graph before it is persisted: an employee must never become its
//! own ancestor through the manager chain.
//!
//! The walk is iterative with a visited set, so it terminates even when the
//! stored data already contains a cycle (corrupt state from before the
//! guard existed); a revisited id is a safety stop, not something this
//! check reports.

use std::collections::{HashMap, HashSet};

use crate::value_objects::EmployeeId;

/// Adjacency view of the manager graph: employee id -> manager id
#[derive(Debug, Clone, Default)]
pub struct ManagerGraph {
    parent: HashMap<EmployeeId, EmployeeId>,
}

impl ManagerGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from (employee, manager) pairs
    ///
    /// Pairs with no manager contribute a terminal node.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (EmployeeId, Option<EmployeeId>)>,
    {
        let parent = pairs
            .into_iter()
            .filter_map(|(employee, manager)| manager.map(|m| (employee, m)))
            .collect();
        Self { parent }
    }

    /// The current manager of the given employee, if any
    #[must_use]
    pub fn manager_of(&self, employee: EmployeeId) -> Option<EmployeeId> {
        self.parent.get(&employee).copied()
    }

    /// Check whether assigning `proposed_manager` as the line manager of
    /// `employee` would introduce a cycle
    ///
    /// Returns true immediately for a self-assignment, and true whenever
    /// `employee` already appears in the proposed manager's chain. Assigning
    /// no manager is trivially acyclic. A manager id that does not exist in
    /// the graph simply terminates the walk; referential integrity is a
    /// separate validation concern.
    #[must_use]
    pub fn would_introduce_cycle(
        &self,
        employee: EmployeeId,
        proposed_manager: Option<EmployeeId>,
    ) -> bool {
        let Some(start) = proposed_manager else {
            return false;
        };
        if start == employee {
            return true;
        }

        let mut visited = HashSet::new();
        visited.insert(start);

        let mut current = start;
        while let Some(next) = self.manager_of(current) {
            if next == employee {
                return true;
            }
            if !visited.insert(next) {
                // Pre-existing cycle in stored data; stop walking
                break;
            }
            current = next;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> EmployeeId {
        EmployeeId::new(n)
    }

    #[test]
    fn test_self_assignment_is_a_cycle() {
        let graph = ManagerGraph::new();
        assert!(graph.would_introduce_cycle(id(1), Some(id(1))));
    }

    #[test]
    fn test_no_manager_is_never_a_cycle() {
        let graph = ManagerGraph::from_pairs([(id(1), Some(id(2))), (id(2), None)]);
        assert!(!graph.would_introduce_cycle(id(1), None));
    }

    #[test]
    fn test_direct_cycle_rejected() {
        // E1 manages E2; assigning E1.manager = E2 closes the loop
        let graph = ManagerGraph::from_pairs([(id(2), Some(id(1)))]);
        assert!(graph.would_introduce_cycle(id(1), Some(id(2))));
    }

    #[test]
    fn test_indirect_three_node_cycle_rejected() {
        // E1 reports to E2, E2 reports to E3; assigning E3.manager = E1
        // would make E3 its own ancestor
        let graph = ManagerGraph::from_pairs([(id(1), Some(id(2))), (id(2), Some(id(3)))]);
        assert!(graph.would_introduce_cycle(id(3), Some(id(1))));
    }

    #[test]
    fn test_unrelated_manager_accepted() {
        let graph = ManagerGraph::from_pairs([(id(1), Some(id(2))), (id(2), Some(id(3)))]);
        assert!(!graph.would_introduce_cycle(id(3), Some(id(4))));
    }

    #[test]
    fn test_deep_chain_detects_ancestor() {
        let graph = ManagerGraph::from_pairs([
            (id(1), Some(id(2))),
            (id(2), Some(id(3))),
            (id(3), Some(id(4))),
            (id(4), Some(id(5))),
        ]);
        // E5 is at the top of E1's chain; anything in the chain is rejected
        for manager in 1..=4 {
            assert!(graph.would_introduce_cycle(id(5), Some(id(manager))));
        }
        assert!(!graph.would_introduce_cycle(id(5), Some(id(6))));
    }

    #[test]
    fn test_terminates_over_corrupt_existing_cycle() {
        // Stored data already contains E1 <-> E2; the walk must stop rather
        // than loop, and must not implicate an unrelated employee
        let graph = ManagerGraph::from_pairs([(id(1), Some(id(2))), (id(2), Some(id(1)))]);
        assert!(!graph.would_introduce_cycle(id(3), Some(id(1))));
    }

    #[test]
    fn test_nonexistent_manager_terminates_walk() {
        let graph = ManagerGraph::new();
        assert!(!graph.would_introduce_cycle(id(1), Some(id(99))));
    }
}
