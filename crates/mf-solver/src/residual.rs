//! Residual capacity bookkeeping.

use mf_core::{Capacity, CapacityMatrix, VertexId};

use crate::error::{SolverError, SolverResult};

/// Remaining forward capacity plus accumulated (cancellable) reverse capacity.
///
/// Owned by exactly one solver call. For every pair `(u, v)` the sum
/// `r[u][v] + r[v][u]` stays equal to `c[u][v] + c[v][u]` of the matrix it was
/// created from, and no entry ever drops below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualGraph {
    matrix: CapacityMatrix,
}

impl ResidualGraph {
    /// Start from an independent copy of `capacity`.
    pub fn from_capacity(capacity: &CapacityMatrix) -> Self {
        Self {
            matrix: capacity.clone(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Residual capacity of `u -> v`.
    #[inline]
    pub fn residual(&self, u: VertexId, v: VertexId) -> Capacity {
        self.matrix[(u.pos(), v.pos())]
    }

    #[inline]
    pub(crate) fn at(&self, u: usize, v: usize) -> Capacity {
        self.matrix[(u, v)]
    }

    pub fn matrix(&self) -> &CapacityMatrix {
        &self.matrix
    }

    /// Push `amount` units along `u -> v`, opening the same amount on `v -> u`.
    ///
    /// Callers guarantee `amount <= r[u][v]`.
    pub(crate) fn push(&mut self, u: VertexId, v: VertexId, amount: Capacity) -> SolverResult<()> {
        let (u, v) = (u.pos(), v.pos());
        debug_assert!(amount <= self.matrix[(u, v)]);
        let back = self.matrix[(v, u)]
            .checked_add(amount)
            .ok_or(SolverError::Overflow)?;
        self.matrix[(u, v)] -= amount;
        self.matrix[(v, u)] = back;
        Ok(())
    }

    /// Net flow leaving `v`.
    pub fn net_outflow(&self, capacity: &CapacityMatrix, v: VertexId) -> Capacity {
        let row = v.pos();
        (0..self.vertex_count())
            .map(|w| capacity[(row, w)] - self.matrix[(row, w)])
            .sum()
    }

    /// Net flow entering `v`.
    pub fn net_inflow(&self, capacity: &CapacityMatrix, v: VertexId) -> Capacity {
        let col = v.pos();
        (0..self.vertex_count())
            .map(|w| capacity[(w, col)] - self.matrix[(w, col)])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::zero_matrix;

    fn v(i: u32) -> VertexId {
        VertexId::from_index(i)
    }

    #[test]
    fn copy_does_not_alias() {
        let mut c = zero_matrix(2);
        c[(0, 1)] = 4;
        let mut r = ResidualGraph::from_capacity(&c);
        r.push(v(0), v(1), 3).unwrap();

        assert_eq!(c[(0, 1)], 4);
        assert_eq!(r.residual(v(0), v(1)), 1);
        assert_eq!(r.residual(v(1), v(0)), 3);
    }

    #[test]
    fn push_preserves_pair_sum() {
        let mut c = zero_matrix(2);
        c[(0, 1)] = 5;
        c[(1, 0)] = 2;
        let mut r = ResidualGraph::from_capacity(&c);
        r.push(v(0), v(1), 5).unwrap();
        r.push(v(1), v(0), 6).unwrap();
        assert_eq!(r.residual(v(0), v(1)) + r.residual(v(1), v(0)), 7);
        assert_eq!(r.residual(v(0), v(1)), 6);
    }

    #[test]
    fn push_overflow_is_reported() {
        let mut c = zero_matrix(2);
        c[(0, 1)] = 1;
        c[(1, 0)] = Capacity::MAX;
        let mut r = ResidualGraph::from_capacity(&c);
        assert_eq!(r.push(v(0), v(1), 1), Err(SolverError::Overflow));
        // Unchanged after a failed push
        assert_eq!(r.matrix(), &c);
    }

    #[test]
    fn net_flows_balance_on_a_path() {
        let mut c = zero_matrix(3);
        c[(0, 1)] = 4;
        c[(1, 2)] = 3;
        let mut r = ResidualGraph::from_capacity(&c);
        r.push(v(0), v(1), 3).unwrap();
        r.push(v(1), v(2), 3).unwrap();

        assert_eq!(r.net_outflow(&c, v(0)), 3);
        assert_eq!(r.net_inflow(&c, v(2)), 3);
        assert_eq!(r.net_inflow(&c, v(1)), r.net_outflow(&c, v(1)));
    }
}
