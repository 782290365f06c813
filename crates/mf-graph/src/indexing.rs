//! Stable indexing shared by the reduction and flow attribution.
//!
//! Provides a bidirectional mapping between node names and contiguous
//! positions (0..N). Positions follow node insertion order; the split graph's
//! vertex layout and the attribution both depend on that contract.

use std::collections::HashMap;

use mf_core::{NodeId, VertexId, in_vertex, out_vertex};

use crate::error::{GraphError, GraphResult};
use crate::graph::Node;

/// Index map providing stable, contiguous indices for network nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap {
    /// Contiguous list of node names (index -> name).
    names: Vec<String>,

    /// Reverse lookup: name -> index.
    name_to_idx: HashMap<String, NodeId>,
}

impl IndexMap {
    /// Build an index map from nodes in insertion order.
    pub fn from_nodes(nodes: &[Node]) -> GraphResult<Self> {
        let mut names = Vec::with_capacity(nodes.len());
        let mut name_to_idx = HashMap::with_capacity(nodes.len());

        for (i, node) in nodes.iter().enumerate() {
            let id = NodeId::from_index(i as u32);
            if name_to_idx.insert(node.name.clone(), id).is_some() {
                return Err(GraphError::DuplicateNode {
                    name: node.name.clone(),
                });
            }
            names.push(node.name.clone());
        }

        Ok(Self { names, name_to_idx })
    }

    /// Number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of vertices in the split graph (two per node).
    pub fn vertex_count(&self) -> usize {
        2 * self.names.len()
    }

    /// Get the index of a node name, if present.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.name_to_idx.get(name).copied()
    }

    /// Get the index of a node name, reporting who referenced it when missing.
    pub fn require(&self, name: &str, context: impl Into<String>) -> GraphResult<NodeId> {
        self.get(name).ok_or_else(|| GraphError::UnknownNode {
            name: name.to_string(),
            context: context.into(),
        })
    }

    /// Get the name at an index (None if out of bounds).
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id.pos()).map(String::as_str)
    }

    /// All node names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// In- and out-vertex of a named node.
    pub fn vertices(&self, name: &str) -> Option<(VertexId, VertexId)> {
        self.get(name).map(|id| (in_vertex(id), out_vertex(id)))
    }
}
