//! Graph-specific error types.

use mf_core::{Capacity, MfError};
use thiserror::Error;

/// Network construction and reduction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A name (source, sink or edge endpoint) is not a node of the network.
    #[error("Unknown node '{name}' referenced by {context}")]
    UnknownNode { name: String, context: String },

    /// Two nodes share the same name.
    #[error("Duplicate node name '{name}'")]
    DuplicateNode { name: String },

    /// A node or edge capacity is below zero.
    #[error("Negative capacity for {what}: {value}")]
    NegativeCapacity { what: String, value: Capacity },

    /// The builder was finished without a source or sink.
    #[error("No {role} node was set")]
    MissingTerminal { role: &'static str },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for MfError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownNode { name, .. } => MfError::UnknownNode { name },
            GraphError::NegativeCapacity { what, value } => {
                MfError::NegativeCapacity { what, value }
            }
            other => MfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
