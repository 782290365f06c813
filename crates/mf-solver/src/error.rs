//! Error types for solver operations.

use mf_core::{Capacity, MfError};
use thiserror::Error;

/// Errors that can occur while solving.
///
/// Everything except `Graph` and `Overflow` is an invalid-argument error and
/// is raised before any search work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Capacity matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Capacity matrix has {count} vertices, more than vertex ids can address")]
    TooManyVertices { count: usize },

    #[error("{role} vertex {index} out of bounds (vertex count {len})")]
    VertexOutOfBounds {
        role: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Source and sink must differ (both are vertex {vertex})")]
    SourceIsSink { vertex: usize },

    #[error("Negative capacity {value} on matrix entry ({from}, {to})")]
    NegativeCapacity {
        from: usize,
        to: usize,
        value: Capacity,
    },

    #[error("Flow exceeds the representable capacity range")]
    Overflow,

    #[error("Graph error: {0}")]
    Graph(#[from] mf_graph::GraphError),
}

impl SolverError {
    /// True for errors rejected up front because of bad solver inputs.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, SolverError::Graph(_) | SolverError::Overflow)
    }
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for MfError {
    fn from(e: SolverError) -> Self {
        let what = e.to_string();
        match e {
            SolverError::Graph(g) => g.into(),
            SolverError::Overflow => MfError::Invariant { what },
            SolverError::NegativeCapacity { value, .. } => MfError::NegativeCapacity { what, value },
            _ => MfError::InvalidArg { what },
        }
    }
}
