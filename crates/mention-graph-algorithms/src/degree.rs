//! Node degree measures

use super::common::GraphView;

/// Number of distinct neighbors for every node, indexed like the view
pub fn degrees(view: &GraphView) -> Vec<usize> {
    (0..view.node_count).map(|idx| view.degree(idx)).collect()
}

/// Weighted degree (sum of incident edge weights) for every node
pub fn strengths(view: &GraphView) -> Vec<u64> {
    (0..view.node_count)
        .map(|idx| view.weights(idx).iter().sum())
        .collect()
}
