//! Vertex-splitting reduction.
//!
//! Every node `i` becomes an in-vertex `2i` and an out-vertex `2i+1` joined by
//! an internal edge carrying the node capacity. Original edges run from the
//! tail's out-vertex to the head's in-vertex, so a node-capacitated network
//! becomes an equivalent edge-only capacity matrix.

use std::collections::HashSet;

use mf_core::{CapacityMatrix, VertexId, in_vertex, out_vertex, zero_matrix};
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::FlowNetwork;
use crate::indexing::IndexMap;
use crate::validate;

/// Edge-only reduction of a [`FlowNetwork`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitGraph {
    /// `2N x 2N` capacity matrix.
    pub matrix: CapacityMatrix,
    /// Out-vertex of the original source.
    pub source: VertexId,
    /// In-vertex of the original sink.
    pub sink: VertexId,
    /// Name <-> index mapping used to lay out the matrix.
    pub index: IndexMap,
    /// Labels of edges whose capacity replaced an earlier edge's, in input order.
    pub overwritten: Vec<String>,
}

impl SplitGraph {
    pub fn vertex_count(&self) -> usize {
        self.matrix.nrows()
    }
}

/// Reduce a node-capacitated network to an edge-capacitated matrix.
///
/// Fails when a node name repeats, a capacity is negative, or the source, sink
/// or an edge endpoint is not a node. When a `(from, to)` pair repeats, the
/// last edge's capacity replaces the earlier ones.
pub fn split_vertices(network: &FlowNetwork) -> GraphResult<SplitGraph> {
    let index = IndexMap::from_nodes(&network.nodes)?;
    validate::validate_capacities(network)?;

    let source = out_vertex(index.require(&network.source, "source")?);
    let sink = in_vertex(index.require(&network.sink, "sink")?);

    let mut matrix = zero_matrix(index.vertex_count());

    // Internal in -> out edges carry the node capacities
    for (i, node) in network.nodes.iter().enumerate() {
        let (vin, vout) = (2 * i, 2 * i + 1);
        matrix[(vin, vout)] = node.capacity;
    }

    // Original edges: out(u) -> in(v)
    let mut written = HashSet::new();
    let mut overwritten = Vec::new();
    for edge in &network.edges {
        let context = || format!("edge '{}'", edge.label());
        let u = out_vertex(index.require(&edge.from, context())?);
        let v = in_vertex(index.require(&edge.to, context())?);

        let slot = &mut matrix[(u.pos(), v.pos())];
        if !written.insert((u, v)) {
            debug!(
                edge = %edge.label(),
                previous = *slot,
                capacity = edge.capacity,
                "duplicate edge overwrites earlier capacity"
            );
            overwritten.push(edge.label());
        }
        *slot = edge.capacity;
    }

    Ok(SplitGraph {
        matrix,
        source,
        sink,
        index,
        overwritten,
    })
}
