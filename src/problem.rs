//! Problem definition for the single-allocation hub location problem.

use crate::error::HubError;
use serde::{Deserialize, Serialize};

/// Represents a hub location problem instance.
///
/// Both matrices are dense `n × n` and indexed with 0-based node indices;
/// nodes are identified by `index + 1` everywhere else in the crate.
/// The instance is immutable once built, so it can be shared read-only
/// between any number of workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProblemData")]
pub struct Problem {
    name: String,
    flow: Vec<Vec<f64>>,
    cost: Vec<Vec<f64>>,
    number_of_hubs: usize,
}

/// Unvalidated wire form of a problem; deserialised problems go through
/// the same checks as `Problem::new`.
#[derive(Deserialize)]
struct ProblemData {
    name: String,
    flow: Vec<Vec<f64>>,
    cost: Vec<Vec<f64>>,
    number_of_hubs: usize,
}

impl TryFrom<ProblemData> for Problem {
    type Error = HubError;

    fn try_from(data: ProblemData) -> Result<Self, Self::Error> {
        Problem::new(data.name, data.flow, data.cost, data.number_of_hubs)
    }
}

impl Problem {
    /// Create a new problem, validating the matrices and the hub count.
    pub fn new(
        name: String,
        flow: Vec<Vec<f64>>,
        cost: Vec<Vec<f64>>,
        number_of_hubs: usize,
    ) -> Result<Self, HubError> {
        let n = Self::check_dimensions(&flow, &cost)?;

        Self::check_entries("Flow", &flow)?;
        Self::check_entries("Cost", &cost)?;

        if number_of_hubs == 0 || number_of_hubs > n {
            return Err(HubError::InvalidHubCount {
                hubs: number_of_hubs,
                nodes: n,
            });
        }

        Ok(Problem {
            name,
            flow,
            cost,
            number_of_hubs,
        })
    }

    /// Check that both matrices are square and of equal size, returning the node count.
    pub fn check_dimensions(flow: &[Vec<f64>], cost: &[Vec<f64>]) -> Result<usize, HubError> {
        Self::check_square("Flow", flow)?;
        Self::check_square("Cost", cost)?;

        if flow.len() != cost.len() {
            return Err(HubError::DimensionMismatch {
                expected: flow.len(),
                found: cost.len(),
            });
        }

        if flow.is_empty() {
            return Err(HubError::EmptyInstance);
        }

        Ok(flow.len())
    }

    fn check_square(matrix: &'static str, rows: &[Vec<f64>]) -> Result<(), HubError> {
        if let Some(row) = rows.iter().find(|row| row.len() != rows.len()) {
            return Err(HubError::NotSquare {
                matrix,
                rows: rows.len(),
                columns: row.len(),
            });
        }
        Ok(())
    }

    fn check_entries(matrix: &'static str, rows: &[Vec<f64>]) -> Result<(), HubError> {
        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(HubError::InvalidEntry {
                        matrix,
                        row,
                        column,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Name of the instance.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The flow matrix.
    pub fn flow(&self) -> &[Vec<f64>] {
        &self.flow
    }

    /// The unit cost matrix.
    pub fn cost(&self) -> &[Vec<f64>] {
        &self.cost
    }

    /// Number of hubs every assignment of this instance must have.
    pub fn number_of_hubs(&self) -> usize {
        self.number_of_hubs
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.flow.len()
    }

    /// Flow shipped from node index `from` to node index `to`.
    pub fn get_flow(&self, from: usize, to: usize) -> f64 {
        self.flow[from][to]
    }

    /// Unit transportation cost from node index `from` to node index `to`.
    pub fn get_cost(&self, from: usize, to: usize) -> f64 {
        self.cost[from][to]
    }

    /// Total flow in the instance.
    pub fn total_flow(&self) -> f64 {
        self.flow.iter().flatten().sum()
    }
}
