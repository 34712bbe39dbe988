//! Solution representation for the hub location problem.

use crate::error::HubError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Assignment of every node to a hub.
///
/// Entry `i` holds the 1-based identifier of the hub that node `i + 1` is
/// allocated to. A node is a hub exactly when it is allocated to itself.
/// The hub set and the clusters are never stored: they are recomputed from
/// the sequence whenever asked for, so a derived assignment can never carry
/// stale structure.
///
/// On the wire an assignment is the plain sequence; deserialising checks
/// coverage and the self-hub marker.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Assignment {
    hubs_of: Vec<usize>,
}

impl Assignment {
    /// Wrap a sequence without checking it. Used by the generators, which
    /// only ever produce feasible sequences.
    pub(crate) fn new_unchecked(hubs_of: Vec<usize>) -> Self {
        Assignment { hubs_of }
    }

    /// Build an assignment from an external sequence, checking that it is
    /// feasible for `expected_hubs` hubs.
    pub fn from_vec(hubs_of: Vec<usize>, expected_hubs: usize) -> Result<Self, HubError> {
        let assignment = Assignment { hubs_of };
        assignment.validate(expected_hubs)?;
        Ok(assignment)
    }

    /// Check total coverage, the self-hub marker and the hub count.
    pub fn validate(&self, expected_hubs: usize) -> Result<(), HubError> {
        self.check_structure()?;

        let hub_count = self.hub_count();
        if hub_count != expected_hubs {
            return Err(HubError::InvalidAssignment(format!(
                "expected {} hubs, found {}",
                expected_hubs, hub_count
            )));
        }

        Ok(())
    }

    /// Check that every node points at a node in range that is its own hub.
    pub fn check_structure(&self) -> Result<(), HubError> {
        let n = self.hubs_of.len();

        if n == 0 {
            return Err(HubError::InvalidAssignment(
                "assignment covers no node".to_string(),
            ));
        }

        for (index, &hub) in self.hubs_of.iter().enumerate() {
            if hub == 0 || hub > n {
                return Err(HubError::InvalidAssignment(format!(
                    "node {} is assigned to {}, outside 1..={}",
                    index + 1,
                    hub,
                    n
                )));
            }
            if !self.is_hub(hub) {
                return Err(HubError::InvalidAssignment(format!(
                    "node {} is assigned to {}, which is not assigned to itself",
                    index + 1,
                    hub
                )));
            }
        }

        Ok(())
    }

    /// Number of nodes covered by the assignment.
    pub fn len(&self) -> usize {
        self.hubs_of.len()
    }

    /// Check if the assignment covers no node.
    pub fn is_empty(&self) -> bool {
        self.hubs_of.is_empty()
    }

    /// The raw 1-based sequence.
    pub fn as_slice(&self) -> &[usize] {
        &self.hubs_of
    }

    /// Consume the assignment, returning the raw sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.hubs_of
    }

    /// Hub that the 1-based `node` is allocated to.
    pub fn hub_of(&self, node: usize) -> usize {
        self.hubs_of[node - 1]
    }

    /// Check if the 1-based `node` is a hub.
    pub fn is_hub(&self, node: usize) -> bool {
        node >= 1 && node <= self.hubs_of.len() && self.hubs_of[node - 1] == node
    }

    /// Hubs in ascending order.
    pub fn hubs(&self) -> Vec<usize> {
        (1..=self.hubs_of.len())
            .filter(|&node| self.is_hub(node))
            .collect()
    }

    /// Non-hub nodes in ascending order.
    pub fn non_hubs(&self) -> Vec<usize> {
        (1..=self.hubs_of.len())
            .filter(|&node| !self.is_hub(node))
            .collect()
    }

    /// Number of distinct hub identifiers in the sequence.
    pub fn hub_count(&self) -> usize {
        self.hubs_of.iter().collect::<BTreeSet<_>>().len()
    }

    /// Nodes allocated to `hub`, the hub itself included.
    pub fn cluster(&self, hub: usize) -> Vec<usize> {
        self.hubs_of
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h == hub)
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Reallocate the 1-based `node` to `hub`.
    pub(crate) fn set_hub(&mut self, node: usize, hub: usize) {
        self.hubs_of[node - 1] = hub;
    }

    /// Mutable access for whole-sequence rewrites inside the generators.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, usize> {
        self.hubs_of.iter_mut()
    }
}

impl TryFrom<Vec<usize>> for Assignment {
    type Error = HubError;

    fn try_from(hubs_of: Vec<usize>) -> Result<Self, Self::Error> {
        let assignment = Assignment { hubs_of };
        assignment.check_structure()?;
        Ok(assignment)
    }
}

impl From<Assignment> for Vec<usize> {
    fn from(assignment: Assignment) -> Self {
        assignment.hubs_of
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assignment:")?;
        writeln!(f, "  Nodes: {}", self.len())?;
        writeln!(f, "  Hubs: {:?}", self.hubs())?;

        for hub in self.hubs() {
            writeln!(f, "  Cluster {}: {:?}", hub, self.cluster(hub))?;
        }

        Ok(())
    }
}
