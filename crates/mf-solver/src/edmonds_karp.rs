//! Edmonds-Karp maximum flow over a dense capacity matrix.
//!
//! Each round runs a breadth-first search over edges with positive residual
//! capacity, so the augmenting path found always has the fewest edges. This
//! bounds the number of rounds by `O(V * E)` regardless of capacity magnitudes.
//! Neighbours are scanned in ascending vertex order with a FIFO queue, which
//! makes the chosen path (and therefore the final residual) deterministic.

use std::collections::VecDeque;

use mf_core::{Capacity, CapacityMatrix, VertexId, first_negative};
use tracing::{debug, trace};

use crate::error::{SolverError, SolverResult};
use crate::residual::ResidualGraph;

/// Result of a max-flow computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlow {
    /// Total flow from source to sink.
    pub value: Capacity,
    /// Final residual capacities.
    pub residual: ResidualGraph,
    /// Number of augmenting paths used.
    pub augmentations: usize,
}

/// Scratch space for the breadth-first search, reused across rounds.
struct Search {
    visited: Vec<bool>,
    predecessor: Vec<Option<VertexId>>,
    queue: VecDeque<usize>,
}

impl Search {
    fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            predecessor: vec![None; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    /// Breadth-first search from `source`; true when `sink` was reached.
    ///
    /// Predecessors describe a shortest augmenting path once this returns true.
    fn run(&mut self, residual: &ResidualGraph, source: VertexId, sink: VertexId) -> bool {
        self.visited.fill(false);
        self.predecessor.fill(None);
        self.queue.clear();

        let n = residual.vertex_count();
        self.visited[source.pos()] = true;
        self.queue.push_back(source.pos());

        while let Some(u) = self.queue.pop_front() {
            for v in 0..n {
                if self.visited[v] || residual.at(u, v) <= 0 {
                    continue;
                }
                self.visited[v] = true;
                self.predecessor[v] = Some(VertexId::from_index(u as u32));
                if v == sink.pos() {
                    return true;
                }
                self.queue.push_back(v);
            }
        }

        false
    }

    /// Collect the path edges from sink back to source.
    fn trace_path(&self, sink: VertexId, path: &mut Vec<(VertexId, VertexId)>) {
        path.clear();
        let mut v = sink;
        // The source is the only visited vertex without a predecessor
        while let Some(u) = self.predecessor[v.pos()] {
            path.push((u, v));
            v = u;
        }
    }
}

fn validate_input(capacity: &CapacityMatrix, source: VertexId, sink: VertexId) -> SolverResult<()> {
    let (rows, cols) = capacity.shape();
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    if rows >= u32::MAX as usize {
        return Err(SolverError::TooManyVertices { count: rows });
    }
    for (role, vertex) in [("source", source), ("sink", sink)] {
        if vertex.pos() >= rows {
            return Err(SolverError::VertexOutOfBounds {
                role,
                index: vertex.pos(),
                len: rows,
            });
        }
    }
    if source == sink {
        return Err(SolverError::SourceIsSink {
            vertex: source.pos(),
        });
    }
    if let Some((from, to, value)) = first_negative(capacity) {
        return Err(SolverError::NegativeCapacity { from, to, value });
    }
    Ok(())
}

/// Compute the maximum flow from `source` to `sink`.
///
/// `capacity` is copied, never mutated. Fails before any search if the matrix
/// is not square, has a negative entry, or the terminals are out of range or
/// equal.
pub fn edmonds_karp(
    capacity: &CapacityMatrix,
    source: VertexId,
    sink: VertexId,
) -> SolverResult<MaxFlow> {
    validate_input(capacity, source, sink)?;

    let mut residual = ResidualGraph::from_capacity(capacity);
    let mut search = Search::new(residual.vertex_count());
    let mut path = Vec::new();
    let mut value: Capacity = 0;
    let mut augmentations = 0;

    while search.run(&residual, source, sink) {
        search.trace_path(sink, &mut path);

        let Some(bottleneck) = path.iter().map(|&(u, v)| residual.residual(u, v)).min() else {
            break;
        };

        for &(u, v) in &path {
            residual.push(u, v, bottleneck)?;
        }
        value = value.checked_add(bottleneck).ok_or(SolverError::Overflow)?;
        augmentations += 1;

        trace!(
            augmentation = augmentations,
            path_len = path.len(),
            bottleneck,
            total = value,
            "augmented"
        );
    }

    debug!(
        vertices = residual.vertex_count(),
        value, augmentations, "max flow found"
    );

    Ok(MaxFlow {
        value,
        residual,
        augmentations,
    })
}
