//! Allocation swap neighborhood (type 2).

use crate::error::HubError;
use crate::solution::Assignment;
use rand::Rng;

use super::{require, MoveKind, Neighborhood};

impl Neighborhood {
    /// Exchange the hubs of two distinct non-hub nodes.
    ///
    /// Two nodes of the same cluster may be drawn, in which case the
    /// proposal equals the input.
    pub fn allocation_swap<R: Rng + ?Sized>(
        &self,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Result<Assignment, HubError> {
        let kind = MoveKind::AllocationSwap;
        let nodes = assignment.non_hubs();

        require(kind, assignment.hub_count() >= 2 && nodes.len() >= 2)?;

        self.sample_move(kind, assignment, rng, |rng| {
            let first = rng.gen_range(0..nodes.len());
            let second = rng.gen_range(0..nodes.len());

            if first == second {
                return None;
            }

            Some(swap_allocations(assignment, nodes[first], nodes[second]))
        })
    }
}

/// Exchange the hubs of the 1-based nodes `first` and `second`.
pub fn swap_allocations(assignment: &Assignment, first: usize, second: usize) -> Assignment {
    let mut neighbour = assignment.clone();
    neighbour.set_hub(first, assignment.hub_of(second));
    neighbour.set_hub(second, assignment.hub_of(first));
    neighbour
}
