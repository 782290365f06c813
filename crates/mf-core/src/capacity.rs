use nalgebra::DMatrix;

/// Integer capacity / flow quantity.
///
/// Signed so that `capacity - residual` can be reported verbatim even when an
/// overwritten duplicate edge makes it negative. Accepted capacities are `>= 0`.
pub type Capacity = i64;

/// Dense square capacity matrix; entry `(u, v)` is the capacity of edge `u -> v`.
pub type CapacityMatrix = DMatrix<Capacity>;

/// Allocate an all-zero `n x n` capacity matrix.
pub fn zero_matrix(n: usize) -> CapacityMatrix {
    DMatrix::zeros(n, n)
}

/// Find the first negative entry of a matrix in row-major order.
pub fn first_negative(matrix: &CapacityMatrix) -> Option<(usize, usize, Capacity)> {
    (0..matrix.nrows()).find_map(|u| {
        (0..matrix.ncols()).find_map(|v| {
            let c = matrix[(u, v)];
            (c < 0).then_some((u, v, c))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_matrix_is_square_and_empty() {
        let m = zero_matrix(4);
        assert_eq!(m.nrows(), 4);
        assert_eq!(m.ncols(), 4);
        assert!(m.iter().all(|&c| c == 0));
    }

    #[test]
    fn first_negative_scans_row_major() {
        let mut m = zero_matrix(3);
        m[(2, 0)] = -1;
        m[(1, 2)] = -5;
        assert_eq!(first_negative(&m), Some((1, 2, -5)));
        assert_eq!(first_negative(&zero_matrix(2)), None);
    }
}
