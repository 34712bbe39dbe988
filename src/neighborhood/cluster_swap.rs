//! Cluster swap neighborhood (type 4).

use crate::error::HubError;
use crate::solution::Assignment;
use rand::Rng;

use super::{require, MoveKind, Neighborhood};

impl Neighborhood {
    /// Exchange the non-hub members of two distinct hubs.
    pub fn cluster_swap<R: Rng + ?Sized>(
        &self,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Result<Assignment, HubError> {
        let kind = MoveKind::ClusterSwap;
        let hubs = assignment.hubs();

        require(kind, hubs.len() >= 2)?;

        self.sample_move(kind, assignment, rng, |rng| {
            let first = rng.gen_range(0..hubs.len());
            let second = rng.gen_range(0..hubs.len());

            if first == second {
                return None;
            }

            Some(swap_clusters(assignment, hubs[first], hubs[second]))
        })
    }
}

/// Move every non-hub node of `first` to `second` and vice versa.
/// The hubs themselves stay allocated to themselves.
pub fn swap_clusters(assignment: &Assignment, first: usize, second: usize) -> Assignment {
    let mut neighbour = assignment.clone();

    for (index, slot) in neighbour.iter_mut().enumerate() {
        let node = index + 1;
        if node == first || node == second {
            continue;
        }
        if *slot == first {
            *slot = second;
        } else if *slot == second {
            *slot = first;
        }
    }

    neighbour
}
