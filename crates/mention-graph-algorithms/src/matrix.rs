//! Dense adjacency matrix

use super::common::GraphView;
use ndarray::Array2;

/// Dense `N x N` weight matrix in view index order.
///
/// The diagonal is always zero, whatever the view holds.
pub fn adjacency_matrix(view: &GraphView) -> Array2<u64> {
    let n = view.node_count;
    let mut matrix = Array2::<u64>::zeros((n, n));

    for u in 0..n {
        for (&v, &w) in view.neighbors(u).iter().zip(view.weights(u)) {
            matrix[[u, v]] = w;
        }
    }
    for i in 0..n {
        matrix[[i, i]] = 0;
    }

    matrix
}
