//! Maximum-flow solver for networks with node and edge capacities.
//!
//! The network is reduced to an edge-only capacity matrix by vertex splitting
//! (see `mf-graph`), solved with Edmonds-Karp (shortest augmenting paths found
//! by breadth-first search), and the final residual matrix is mapped back onto
//! the original nodes and edges.

pub mod attribute;
pub mod edmonds_karp;
pub mod error;
pub mod residual;
pub mod solve;

pub use attribute::{EdgeFlow, FlowReport, NodeFlow, attribute_flow};
pub use edmonds_karp::{MaxFlow, edmonds_karp};
pub use error::{SolverError, SolverResult};
pub use residual::ResidualGraph;
pub use solve::{FlowSolution, solve};
