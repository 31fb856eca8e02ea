//! Immutable graph built from aggregated pair weights
//!
//! Node order is catalog order. Adjacency is stored symmetrically, one sorted
//! row per node, so neighbor and weight queries never need to canonicalize.

use super::edge::EdgeRecord;
use crate::aggregate::EntityPair;
use crate::catalog::{EntityCatalog, EntityId};
use mention_graph_algorithms::{GraphView, NodeId as AlgoNodeId};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during graph queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Entity {0} is not in the catalog")]
    UnknownEntity(EntityId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Weighted undirected graph over catalog entities
#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    /// Nodes in catalog order
    nodes: Vec<EntityId>,
    /// EntityId -> position in `nodes`
    node_index: FxHashMap<EntityId, usize>,
    /// Per-node neighbor index -> weight; symmetric
    adjacency: Vec<BTreeMap<usize, u64>>,
    edge_count: usize,
    total_weight: u64,
}

impl GraphModel {
    /// Build the graph from a pair-weight map.
    ///
    /// Every catalog entity becomes a node. Pairs with weight 0 are dropped;
    /// a pair naming an entity outside the catalog is rejected.
    pub fn from_weights<'a, I>(catalog: &EntityCatalog, weights: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (&'a EntityPair, &'a u64)>,
    {
        let nodes: Vec<EntityId> = catalog.ids().cloned().collect();
        let node_index: FxHashMap<EntityId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();

        let mut adjacency = vec![BTreeMap::new(); nodes.len()];
        let mut edge_count = 0;
        let mut total_weight = 0;

        for (pair, &weight) in weights {
            if weight == 0 {
                continue;
            }
            let lookup = |id: &EntityId| {
                node_index
                    .get(id)
                    .copied()
                    .ok_or_else(|| GraphError::UnknownEntity(id.clone()))
            };
            let u = lookup(pair.low())?;
            let v = lookup(pair.high())?;

            if adjacency[u].insert(v, weight).is_none() {
                edge_count += 1;
            }
            adjacency[v].insert(u, weight);
            total_weight += weight;
        }

        Ok(GraphModel {
            nodes,
            node_index,
            adjacency,
            edge_count,
            total_weight,
        })
    }

    fn index(&self, id: &EntityId) -> GraphResult<usize> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownEntity(id.clone()))
    }

    /// All nodes in catalog order
    pub fn nodes(&self) -> &[EntityId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Neighbors of a node, in catalog order
    pub fn neighbors(&self, id: &EntityId) -> GraphResult<Vec<&EntityId>> {
        let idx = self.index(id)?;
        Ok(self.adjacency[idx].keys().map(|&n| &self.nodes[n]).collect())
    }

    /// Neighbors of a node with the connecting weights, in catalog order
    pub fn neighbor_weights(&self, id: &EntityId) -> GraphResult<Vec<(&EntityId, u64)>> {
        let idx = self.index(id)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|(&n, &w)| (&self.nodes[n], w))
            .collect())
    }

    /// Number of distinct neighbors
    pub fn degree(&self, id: &EntityId) -> GraphResult<usize> {
        Ok(self.adjacency[self.index(id)?].len())
    }

    /// Sum of incident edge weights
    pub fn strength(&self, id: &EntityId) -> GraphResult<u64> {
        Ok(self.adjacency[self.index(id)?].values().sum())
    }

    /// Weight between two nodes, 0 when they are not connected (or are the same node)
    pub fn weight(&self, a: &EntityId, b: &EntityId) -> GraphResult<u64> {
        let u = self.index(a)?;
        let v = self.index(b)?;
        Ok(self.adjacency[u].get(&v).copied().unwrap_or(0))
    }

    /// Every edge once, sorted by (source, target)
    pub fn edge_list(&self) -> Vec<EdgeRecord> {
        let mut edges: Vec<EdgeRecord> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, row)| {
                row.range(u + 1..).filter_map(move |(&v, &w)| {
                    EntityPair::new(self.nodes[u].clone(), self.nodes[v].clone())
                        .map(|pair| EdgeRecord::new(&pair, w))
                })
            })
            .collect();
        edges.sort();
        edges
    }

    /// Dense CSR view for the algorithms crate.
    ///
    /// View index `i` is catalog position `i`; NodeIds are the positions as u64.
    pub fn view(&self) -> GraphView {
        let index_to_node: Vec<AlgoNodeId> = (0..self.nodes.len() as u64).collect();
        let edges: Vec<(usize, usize, u64)> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, row)| {
                row.range(u + 1..).map(move |(&v, &w)| (u, v, w))
            })
            .collect();
        GraphView::from_edges(index_to_node, &edges)
    }

    /// Identifier for a view NodeId produced by [`GraphModel::view`]
    pub fn entity_for(&self, node: AlgoNodeId) -> Option<&EntityId> {
        self.nodes.get(node as usize)
    }
}
