//! Utility functions for building instances and describing assignments.

use crate::error::HubError;
use crate::problem::Problem;
use crate::solution::Assignment;
use itertools::Itertools;
use rand::Rng;

/// Generate a random instance with `n` nodes.
///
/// Nodes are scattered on a 100 × 100 square; costs are Euclidean distances
/// (symmetric, zero diagonal) and flows are integral demands between
/// distinct nodes, drawn in `0..1000`.
pub fn random_problem<R: Rng + ?Sized>(
    name: &str,
    n: usize,
    number_of_hubs: usize,
    rng: &mut R,
) -> Result<Problem, HubError> {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();

    let mut flow = vec![vec![0.0; n]; n];
    let mut cost = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..n {
            if i != j {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                cost[i][j] = (dx * dx + dy * dy).sqrt();
                flow[i][j] = rng.gen_range(0..1000) as f64;
            }
        }
    }

    Problem::new(name.to_string(), flow, cost, number_of_hubs)
}

/// Render the clusters of an assignment, one line per hub.
pub fn format_clusters(assignment: &Assignment) -> String {
    let mut out = String::new();

    for hub in assignment.hubs() {
        out.push_str(&format!(
            "Hub {}: {}\n",
            hub,
            assignment.cluster(hub).iter().join(" ")
        ));
    }

    out
}
