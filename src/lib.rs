//! # Hub Location
//!
//! Local search core for the single-allocation hub location problem with
//! economies of scale.
//!
//! A fixed number of nodes act as hubs and every other node is allocated to
//! exactly one of them. Shipments travel origin → origin hub → destination
//! hub → destination; the transfer between two distinct hubs is charged on a
//! concave, piecewise-linear function of the flow aggregated between their
//! clusters, so larger consolidated flows get cheaper per unit.
//!
//! The crate provides the pieces an outer search driver (simulated annealing,
//! tabu search, ...) calls repeatedly: a random feasible starting assignment,
//! exact evaluation of the objective, and four neighborhood moves that always
//! preserve the number of hubs. Acceptance, cooling and stopping rules belong
//! to the driver.

pub mod config;
pub mod discount;
pub mod error;
pub mod initial;
pub mod neighborhood;
pub mod objective;
pub mod problem;
pub mod solution;
pub mod utils;

pub use crate::config::Config;
pub use crate::error::HubError;
pub use crate::initial::{build_initial_solution, initial_solution};
pub use crate::neighborhood::{MoveKind, Neighborhood};
pub use crate::objective::{evaluate, total_cost, CostBreakdown};
pub use crate::problem::Problem;
pub use crate::solution::Assignment;

use rand::Rng;

fn default_neighborhood(assignment: &Assignment) -> Neighborhood {
    Neighborhood::from_config(&Config::default(), assignment.len())
}

/// Type 1 move with the default retry budget: relocate a hub onto a non-hub node.
pub fn propose_move_type1<R: Rng + ?Sized>(
    assignment: &Assignment,
    rng: &mut R,
) -> Result<Assignment, HubError> {
    default_neighborhood(assignment).hub_relocation(assignment, rng)
}

/// Type 2 move with the default retry budget: swap the hubs of two nodes.
pub fn propose_move_type2<R: Rng + ?Sized>(
    assignment: &Assignment,
    rng: &mut R,
) -> Result<Assignment, HubError> {
    default_neighborhood(assignment).allocation_swap(assignment, rng)
}

/// Type 3 move with the default retry budget: reallocate one node.
pub fn propose_move_type3<R: Rng + ?Sized>(
    assignment: &Assignment,
    rng: &mut R,
) -> Result<Assignment, HubError> {
    default_neighborhood(assignment).node_relocation(assignment, rng)
}

/// Type 4 move with the default retry budget: swap the clusters of two hubs.
pub fn propose_move_type4<R: Rng + ?Sized>(
    assignment: &Assignment,
    rng: &mut R,
) -> Result<Assignment, HubError> {
    default_neighborhood(assignment).cluster_swap(assignment, rng)
}
