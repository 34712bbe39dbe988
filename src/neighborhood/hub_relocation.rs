//! Hub relocation neighborhood (type 1).

use crate::error::HubError;
use crate::solution::Assignment;
use rand::Rng;

use super::{require, MoveKind, Neighborhood};

impl Neighborhood {
    /// Move a hub onto one of the non-hub nodes.
    ///
    /// A node and a hub are drawn; the node becomes a hub and takes over the
    /// whole cluster of the drawn hub, the old hub included. Draws landing on
    /// a hub node are discarded.
    pub fn hub_relocation<R: Rng + ?Sized>(
        &self,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Result<Assignment, HubError> {
        let kind = MoveKind::HubRelocation;
        let n = assignment.len();
        let hubs = assignment.hubs();

        require(kind, !hubs.is_empty() && hubs.len() < n)?;

        self.sample_move(kind, assignment, rng, |rng| {
            let node = rng.gen_range(1..=n);
            let hub = hubs[rng.gen_range(0..hubs.len())];

            if assignment.is_hub(node) {
                return None;
            }

            Some(relocate_hub(assignment, hub, node))
        })
    }
}

/// Make `node` the hub of every node currently allocated to `hub`, and of itself.
pub fn relocate_hub(assignment: &Assignment, hub: usize, node: usize) -> Assignment {
    let mut neighbour = assignment.clone();
    neighbour.set_hub(node, hub);

    for slot in neighbour.iter_mut() {
        if *slot == hub {
            *slot = node;
        }
    }

    neighbour
}
