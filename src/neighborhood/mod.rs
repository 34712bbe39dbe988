//! Neighborhood moves for the hub location local search.
//!
//! Every generator reads a feasible assignment and returns a new, independent
//! one with the same number of hubs. Draws that would change the hub count
//! are discarded and redrawn, up to a fixed budget of attempts.

pub mod allocation_swap;
pub mod cluster_swap;
pub mod hub_relocation;
pub mod node_relocation;

use crate::config::Config;
use crate::error::HubError;
use crate::solution::Assignment;
use log::{debug, trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four neighborhood structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Type 1: a non-hub node takes over the cluster of an existing hub
    HubRelocation,
    /// Type 2: two non-hub nodes exchange their hubs
    AllocationSwap,
    /// Type 3: a non-hub node moves to another hub
    NodeRelocation,
    /// Type 4: two hubs exchange their non-hub nodes
    ClusterSwap,
}

impl MoveKind {
    pub const ALL: [MoveKind; 4] = [
        MoveKind::HubRelocation,
        MoveKind::AllocationSwap,
        MoveKind::NodeRelocation,
        MoveKind::ClusterSwap,
    ];

    /// Pick one of the four kinds uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Number of the neighborhood structure, from 1 to 4.
    pub fn number(&self) -> usize {
        match self {
            MoveKind::HubRelocation => 1,
            MoveKind::AllocationSwap => 2,
            MoveKind::NodeRelocation => 3,
            MoveKind::ClusterSwap => 4,
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::HubRelocation => "hub relocation",
            MoveKind::AllocationSwap => "allocation swap",
            MoveKind::NodeRelocation => "node relocation",
            MoveKind::ClusterSwap => "cluster swap",
        };
        write!(f, "{}", name)
    }
}

/// Proposes neighboring assignments with a bounded number of draws.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    pub max_attempts: usize,
}

impl Neighborhood {
    /// Create a generator that gives up after `max_attempts` draws.
    pub fn new(max_attempts: usize) -> Self {
        Neighborhood {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Create a generator sized for an instance of `node_count` nodes.
    pub fn from_config(config: &Config, node_count: usize) -> Self {
        Neighborhood::new(config.max_attempts(node_count))
    }

    /// Propose a neighbor of `assignment` using the move `kind`.
    pub fn propose<R: Rng + ?Sized>(
        &self,
        kind: MoveKind,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Result<Assignment, HubError> {
        match kind {
            MoveKind::HubRelocation => self.hub_relocation(assignment, rng),
            MoveKind::AllocationSwap => self.allocation_swap(assignment, rng),
            MoveKind::NodeRelocation => self.node_relocation(assignment, rng),
            MoveKind::ClusterSwap => self.cluster_swap(assignment, rng),
        }
    }

    /// Propose a neighbor using a move kind drawn uniformly.
    pub fn propose_random<R: Rng + ?Sized>(
        &self,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Result<(MoveKind, Assignment), HubError> {
        let kind = MoveKind::random(rng);
        self.propose(kind, assignment, rng)
            .map(|neighbour| (kind, neighbour))
    }

    /// Draw candidates until one keeps the hub count of `assignment`.
    ///
    /// `draw` returns `None` for a draw that does not describe a move, such
    /// as the same node picked twice.
    pub(crate) fn sample_move<R, F>(
        &self,
        kind: MoveKind,
        assignment: &Assignment,
        rng: &mut R,
        mut draw: F,
    ) -> Result<Assignment, HubError>
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> Option<Assignment>,
    {
        let hub_count = assignment.hub_count();

        for attempt in 1..=self.max_attempts {
            let candidate = match draw(&mut *rng) {
                Some(candidate) => candidate,
                None => {
                    trace!("Discarded {} draw {}: not a move", kind, attempt);
                    continue;
                }
            };

            if candidate.hub_count() != hub_count {
                trace!(
                    "Discarded {} draw {}: hub count {} instead of {}",
                    kind,
                    attempt,
                    candidate.hub_count(),
                    hub_count
                );
                continue;
            }

            debug_assert!(
                candidate.validate(hub_count).is_ok(),
                "{} move produced an infeasible assignment: {:?}",
                kind,
                candidate
            );
            debug!("Accepted {} move after {} draws", kind, attempt);
            return Ok(candidate);
        }

        warn!(
            "No feasible {} move found in {} draws",
            kind, self.max_attempts
        );
        Err(HubError::NoFeasibleMove {
            kind,
            attempts: self.max_attempts,
        })
    }
}

/// Fail fast when the assignment is structurally unable to host a move.
pub(crate) fn require(kind: MoveKind, possible: bool) -> Result<(), HubError> {
    if possible {
        Ok(())
    } else {
        warn!("Assignment admits no {} move", kind);
        Err(HubError::NoFeasibleMove { kind, attempts: 0 })
    }
}
