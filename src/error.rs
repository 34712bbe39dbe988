//! Error type shared by every operation of the hub location core.

use crate::neighborhood::MoveKind;
use std::fmt;

/// Errors surfaced by problem construction, evaluation and move generation.
///
/// Nothing is recovered internally: a caller receiving any of these should
/// treat the current planning attempt as failed.
#[derive(Debug, Clone, PartialEq)]
pub enum HubError {
    /// A matrix is not square (`rows` rows, one of which has `columns` entries).
    NotSquare {
        matrix: &'static str,
        rows: usize,
        columns: usize,
    },
    /// The instance has no nodes.
    EmptyInstance,
    /// The flow matrix, cost matrix or assignment disagree on the node count.
    DimensionMismatch { expected: usize, found: usize },
    /// A matrix entry is negative, NaN or infinite.
    InvalidEntry {
        matrix: &'static str,
        row: usize,
        column: usize,
        value: f64,
    },
    /// The requested number of hubs is outside `1..=node_count`.
    InvalidHubCount { hubs: usize, nodes: usize },
    /// An externally supplied assignment breaks one of the feasibility invariants.
    InvalidAssignment(String),
    /// A neighborhood generator found no hub-count-preserving move.
    NoFeasibleMove { kind: MoveKind, attempts: usize },
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare {
                matrix,
                rows,
                columns,
            } => write!(
                f,
                "{} matrix is not square: {} rows but a row with {} columns",
                matrix, rows, columns
            ),
            Self::EmptyInstance => write!(f, "Problem instance has no nodes"),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension mismatch: expected {} nodes, found {}",
                expected, found
            ),
            Self::InvalidEntry {
                matrix,
                row,
                column,
                value,
            } => write!(
                f,
                "{} matrix entry ({}, {}) must be finite and non-negative, got {}",
                matrix, row, column, value
            ),
            Self::InvalidHubCount { hubs, nodes } => write!(
                f,
                "Cannot select {} hubs from {} nodes",
                hubs, nodes
            ),
            Self::InvalidAssignment(reason) => write!(f, "Invalid assignment: {}", reason),
            Self::NoFeasibleMove { kind, attempts } => write!(
                f,
                "No feasible {} move found after {} attempts",
                kind, attempts
            ),
        }
    }
}

impl std::error::Error for HubError {}
