//! Graph topology measures

use super::common::GraphView;

/// Triangle Counting
///
/// Each triangle is counted once, using the ordering u < v < w over dense indices.
pub fn count_triangles(view: &GraphView) -> usize {
    let mut triangle_count = 0;

    for u in 0..view.node_count {
        let u_neighbors = view.neighbors(u);
        for &v in u_neighbors.iter().filter(|&&v| v > u) {
            // Both rows are sorted, so a merge walk finds common neighbors w > v
            let v_neighbors = view.neighbors(v);
            let (mut i, mut j) = (0, 0);
            while i < u_neighbors.len() && j < v_neighbors.len() {
                let (a, b) = (u_neighbors[i], v_neighbors[j]);
                if a < b {
                    i += 1;
                } else if b < a {
                    j += 1;
                } else {
                    if a > v {
                        triangle_count += 1;
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
    }

    triangle_count
}

/// Edge density `2E / (N(N-1))`, 0.0 for graphs with fewer than two nodes
pub fn density(view: &GraphView) -> f64 {
    let n = view.node_count;
    if n < 2 {
        return 0.0;
    }
    (2 * view.edge_count()) as f64 / (n * (n - 1)) as f64
}
