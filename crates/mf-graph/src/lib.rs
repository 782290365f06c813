//! mf-graph: network model and vertex-splitting reduction for vcflow.
//!
//! Provides:
//! - Core data structures (Node, Edge, FlowNetwork)
//! - Incremental network builder with validation
//! - Stable name <-> index mapping shared by the reduction and attribution
//! - The vertex-splitting transformation into an edge-only capacity matrix
//!
//! # Example
//!
//! ```
//! use mf_graph::{NetworkBuilder, split_vertices};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_node("s", 100);
//! builder.add_node("t", 100);
//! builder.add_edge("s", "t", 7);
//! builder.set_source("s");
//! builder.set_sink("t");
//! let network = builder.build().unwrap();
//!
//! let split = split_vertices(&network).unwrap();
//! assert_eq!(split.vertex_count(), 4);
//! assert_eq!(split.matrix[(1, 2)], 7);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod split;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, FlowNetwork, Node};
pub use indexing::IndexMap;
pub use split::{SplitGraph, split_vertices};
