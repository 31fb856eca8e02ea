//! Connected components
//!
//! Union-find over the undirected view. Isolated nodes form singleton components.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Result of connected component labelling
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentsResult {
    /// Components as lists of NodeIds, largest first, ties by smallest member
    pub components: Vec<Vec<NodeId>>,
    /// Map of NodeId -> position in `components`
    pub node_component: HashMap<NodeId, usize>,
}

impl ComponentsResult {
    /// Number of components
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Size of the largest component, 0 for an empty graph
    pub fn largest(&self) -> usize {
        self.components.first().map_or(0, Vec::len)
    }
}

struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn root(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            // Path halving
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn join(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.root(a), self.root(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}

/// Label every node with its connected component
pub fn connected_components(view: &GraphView) -> ComponentsResult {
    let n = view.node_count;
    let mut set = DisjointSet::new(n);

    for u in 0..n {
        for &v in view.neighbors(u) {
            if u < v {
                set.join(u, v);
            }
        }
    }

    let mut by_root: HashMap<usize, Vec<NodeId>> = HashMap::new();
    for i in 0..n {
        let root = set.root(i);
        by_root.entry(root).or_default().push(view.index_to_node[i]);
    }

    let mut components: Vec<Vec<NodeId>> = by_root
        .into_values()
        .map(|mut members| {
            members.sort_unstable();
            members
        })
        .collect();
    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));

    let node_component = components
        .iter()
        .enumerate()
        .flat_map(|(cid, members)| members.iter().map(move |&id| (id, cid)))
        .collect();

    ComponentsResult {
        components,
        node_component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_with_isolated_node() {
        // 1-2, 3-4-5, 6 isolated
        let view = GraphView::from_edges(
            vec![1, 2, 3, 4, 5, 6],
            &[(0, 1, 1), (2, 3, 4), (3, 4, 1)],
        );

        let result = connected_components(&view);

        assert_eq!(result.count(), 3);
        assert_eq!(result.largest(), 3);
        assert_eq!(result.components[0], vec![3, 4, 5]);
        assert_eq!(result.components[1], vec![1, 2]);
        assert_eq!(result.components[2], vec![6]);
        assert_eq!(result.node_component[&4], result.node_component[&5]);
        assert_ne!(result.node_component[&1], result.node_component[&6]);
    }

    #[test]
    fn test_empty_graph() {
        let view = GraphView::from_edges(Vec::new(), &[]);
        let result = connected_components(&view);
        assert_eq!(result.count(), 0);
        assert_eq!(result.largest(), 0);
    }
}
