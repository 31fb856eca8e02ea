//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of an undirected weighted graph for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph in Compressed Sparse Row (CSR) format.
///
/// Every edge {u, v} is stored twice, once in the row of `u` and once in the row of `v`,
/// so neighbor iteration never has to consult a second structure.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `neighbors`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices, sorted within each row
    pub neighbors: Vec<usize>,
    /// Edge weights: aligned with `neighbors`
    pub weights: Vec<u64>,
}

impl GraphView {
    /// Build a view from an edge list over dense indices.
    ///
    /// Self-loops and zero-weight edges are dropped. Parallel edges for the
    /// same unordered pair are summed into one.
    pub fn from_edges(index_to_node: Vec<NodeId>, edges: &[(usize, usize, u64)]) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut rows: Vec<Vec<(usize, u64)>> = vec![Vec::new(); node_count];
        for &(u, v, w) in edges {
            if u == v || w == 0 || u >= node_count || v >= node_count {
                continue;
            }
            rows[u].push((v, w));
            rows[v].push((u, w));
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut neighbors = Vec::new();
        let mut weights = Vec::new();

        offsets.push(0);
        for mut row in rows {
            row.sort_unstable_by_key(|&(v, _)| v);
            let mut last: Option<usize> = None;
            for (v, w) in row {
                if last == Some(v) {
                    // Same neighbor again: fold into the previous slot
                    if let Some(prev) = weights.last_mut() {
                        *prev += w;
                    }
                    continue;
                }
                neighbors.push(v);
                weights.push(w);
                last = Some(v);
            }
            offsets.push(neighbors.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            neighbors,
            weights,
        }
    }

    /// Number of distinct neighbors of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a node, sorted by index
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.neighbors[start..end]
    }

    /// Get weights for the edges of a node, aligned with `neighbors(idx)`
    pub fn weights(&self, idx: usize) -> &[u64] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Weight between two nodes (by index), 0 if they are not adjacent
    pub fn weight(&self, u: usize, v: usize) -> u64 {
        match self.neighbors(u).binary_search(&v) {
            Ok(pos) => self.weights(u)[pos],
            Err(_) => 0,
        }
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_is_symmetric() {
        let view = GraphView::from_edges(vec![10, 20, 30], &[(0, 1, 2), (2, 1, 1)]);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 2);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert_eq!(view.weight(0, 1), 2);
        assert_eq!(view.weight(1, 0), 2);
        assert_eq!(view.weight(1, 2), 1);
        assert_eq!(view.weight(0, 2), 0);
        assert_eq!(view.node_to_index[&30], 2);
    }

    #[test]
    fn test_self_loops_and_zero_weights_dropped() {
        let view = GraphView::from_edges(vec![1, 2], &[(0, 0, 5), (0, 1, 0)]);
        assert_eq!(view.edge_count(), 0);
        assert_eq!(view.degree(0), 0);
    }

    #[test]
    fn test_parallel_edges_are_summed() {
        let view = GraphView::from_edges(vec![1, 2], &[(0, 1, 2), (1, 0, 3)]);
        assert_eq!(view.edge_count(), 1);
        assert_eq!(view.weight(0, 1), 5);
        assert_eq!(view.degree(1), 1);
    }
}
