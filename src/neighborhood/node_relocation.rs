//! Node relocation neighborhood (type 3).

use crate::error::HubError;
use crate::solution::Assignment;
use rand::Rng;

use super::{require, MoveKind, Neighborhood};

impl Neighborhood {
    /// Reallocate one non-hub node to a hub it is not allocated to yet.
    pub fn node_relocation<R: Rng + ?Sized>(
        &self,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Result<Assignment, HubError> {
        let kind = MoveKind::NodeRelocation;
        let hubs = assignment.hubs();
        let nodes = assignment.non_hubs();

        require(kind, hubs.len() >= 2 && !nodes.is_empty())?;

        self.sample_move(kind, assignment, rng, |rng| {
            let node = nodes[rng.gen_range(0..nodes.len())];
            let hub = hubs[rng.gen_range(0..hubs.len())];

            if assignment.hub_of(node) == hub {
                return None;
            }

            Some(relocate_node(assignment, node, hub))
        })
    }
}

/// Allocate the 1-based `node` to `hub`.
pub fn relocate_node(assignment: &Assignment, node: usize, hub: usize) -> Assignment {
    let mut neighbour = assignment.clone();
    neighbour.set_hub(node, hub);
    neighbour
}
