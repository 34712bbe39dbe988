//! Random construction of a feasible starting assignment.

use crate::error::HubError;
use crate::problem::Problem;
use crate::solution::Assignment;
use log::debug;
use rand::seq::index;
use rand::Rng;

/// Draw a random feasible assignment for `problem`.
///
/// `number_of_hubs` distinct nodes are drawn uniformly as hubs, then every
/// other node is allocated to a hub drawn uniformly and independently. No
/// attempt is made to balance clusters or to look at costs.
pub fn initial_solution<R: Rng + ?Sized>(problem: &Problem, rng: &mut R) -> Assignment {
    let assignment = draw_assignment(problem.node_count(), problem.number_of_hubs(), rng);

    debug!(
        "Built initial solution for {} with hubs {:?}",
        problem.name(),
        assignment.hubs()
    );

    assignment
}

/// Validate raw matrices and draw a random feasible assignment.
pub fn build_initial_solution<R: Rng + ?Sized>(
    flow: &[Vec<f64>],
    cost: &[Vec<f64>],
    number_of_hubs: usize,
    rng: &mut R,
) -> Result<Assignment, HubError> {
    let n = Problem::check_dimensions(flow, cost)?;
    if number_of_hubs == 0 || number_of_hubs > n {
        return Err(HubError::InvalidHubCount {
            hubs: number_of_hubs,
            nodes: n,
        });
    }

    let assignment = draw_assignment(n, number_of_hubs, rng);
    debug!("Built initial solution with hubs {:?}", assignment.hubs());

    Ok(assignment)
}

fn draw_assignment<R: Rng + ?Sized>(n: usize, number_of_hubs: usize, rng: &mut R) -> Assignment {
    let hubs: Vec<usize> = index::sample(rng, n, number_of_hubs)
        .into_iter()
        .map(|i| i + 1)
        .collect();

    let mut hubs_of = vec![0; n];
    for &hub in &hubs {
        hubs_of[hub - 1] = hub;
    }
    for slot in hubs_of.iter_mut().filter(|slot| **slot == 0) {
        *slot = hubs[rng.gen_range(0..hubs.len())];
    }

    let assignment = Assignment::new_unchecked(hubs_of);
    debug_assert!(assignment.validate(number_of_hubs).is_ok());
    assignment
}
