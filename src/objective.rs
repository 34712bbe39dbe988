//! Objective function: access legs plus discounted inter-hub transfers.

use crate::discount::interhub_cost;
use crate::error::HubError;
use crate::problem::Problem;
use crate::solution::Assignment;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// Flow aggregated between every ordered pair of clusters.
#[derive(Debug, Clone)]
pub struct HubFlowTable {
    /// Hubs in ascending order; row/column `k` of the table belongs to `hubs[k]`
    pub hubs: Vec<usize>,
    /// Position of each 1-based hub identifier in `hubs`
    positions: Vec<Option<usize>>,
    /// Aggregated flows, `hubs.len()` squared, row-major
    flows: Vec<f64>,
}

impl HubFlowTable {
    /// Aggregate the flow matrix by cluster pair in a single pass.
    ///
    /// The assignment must already satisfy `Assignment::check_structure`.
    pub fn build(flow: &[Vec<f64>], assignment: &Assignment) -> Self {
        let hubs = assignment.hubs();
        let mut positions = vec![None; assignment.len() + 1];
        for (position, &hub) in hubs.iter().enumerate() {
            positions[hub] = Some(position);
        }

        let h = hubs.len();
        let mut flows = vec![0.0; h * h];
        let clusters: Vec<usize> = assignment
            .as_slice()
            .iter()
            .map(|&hub| {
                debug_assert!(positions[hub].is_some(), "{} is not a hub", hub);
                positions[hub].unwrap_or_default()
            })
            .collect();

        for (i, row) in flow.iter().enumerate() {
            let base = clusters[i] * h;
            for (j, &value) in row.iter().enumerate() {
                flows[base + clusters[j]] += value;
            }
        }

        HubFlowTable {
            hubs,
            positions,
            flows,
        }
    }

    /// Aggregated flow from the cluster of hub `from` to the cluster of hub `to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        match (self.position(from), self.position(to)) {
            (Some(k), Some(m)) => self.flows[k * self.hubs.len() + m],
            _ => 0.0,
        }
    }

    fn position(&self, hub: usize) -> Option<usize> {
        self.positions.get(hub).copied().flatten()
    }

    /// Ordered pairs of distinct hubs with their aggregated flow.
    pub fn transfers(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let h = self.hubs.len();
        iproduct!(0..h, 0..h)
            .filter(|(k, m)| k != m)
            .map(move |(k, m)| (self.hubs[k], self.hubs[m], self.flows[k * h + m]))
    }
}

/// Objective value split into its two components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Origin-to-hub and hub-to-destination legs
    pub access: f64,
    /// Discounted transfers between distinct hubs
    pub transfer: f64,
    pub total: f64,
}

/// Access-leg cost of every ordered node pair, diagonal pairs included.
pub fn access_cost(flow: &[Vec<f64>], cost: &[Vec<f64>], assignment: &Assignment) -> f64 {
    let hubs_of = assignment.as_slice();
    let n = flow.len();

    // Leg from each node to its hub, and from its hub back to the node.
    let collect: Vec<f64> = (0..n).map(|i| cost[i][hubs_of[i] - 1]).collect();
    let distribute: Vec<f64> = (0..n).map(|j| cost[hubs_of[j] - 1][j]).collect();

    iproduct!(0..n, 0..n)
        .map(|(i, j)| flow[i][j] * (collect[i] + distribute[j]))
        .sum()
}

/// Discounted transfer cost between every ordered pair of distinct hubs.
pub fn transfer_cost(cost: &[Vec<f64>], table: &HubFlowTable) -> f64 {
    table
        .transfers()
        .map(|(k, m, flow)| interhub_cost(flow) * cost[k - 1][m - 1])
        .sum()
}

fn breakdown(flow: &[Vec<f64>], cost: &[Vec<f64>], assignment: &Assignment) -> CostBreakdown {
    let table = HubFlowTable::build(flow, assignment);
    let access = access_cost(flow, cost, assignment);
    let transfer = transfer_cost(cost, &table);

    CostBreakdown {
        access,
        transfer,
        total: access + transfer,
    }
}

/// Evaluate an assignment and report both cost components.
///
/// The assignment must cover exactly the nodes of `problem` and carry the
/// problem's number of hubs.
pub fn evaluate_breakdown(
    problem: &Problem,
    assignment: &Assignment,
) -> Result<CostBreakdown, HubError> {
    check_coverage(problem.node_count(), assignment)?;
    assignment.validate(problem.number_of_hubs())?;

    Ok(breakdown(problem.flow(), problem.cost(), assignment))
}

/// Total transportation cost of an assignment.
pub fn total_cost(problem: &Problem, assignment: &Assignment) -> Result<f64, HubError> {
    evaluate_breakdown(problem, assignment).map(|costs| costs.total)
}

/// Evaluate an assignment against raw matrices.
///
/// Rejects matrices of different shapes and assignments that do not cover
/// exactly the nodes of the matrices.
pub fn evaluate(
    flow: &[Vec<f64>],
    cost: &[Vec<f64>],
    assignment: &Assignment,
) -> Result<f64, HubError> {
    let n = Problem::check_dimensions(flow, cost)?;
    check_coverage(n, assignment)?;
    assignment.check_structure()?;

    Ok(breakdown(flow, cost, assignment).total)
}

fn check_coverage(node_count: usize, assignment: &Assignment) -> Result<(), HubError> {
    if assignment.len() != node_count {
        return Err(HubError::DimensionMismatch {
            expected: node_count,
            found: assignment.len(),
        });
    }
    Ok(())
}
