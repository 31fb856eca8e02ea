//! Graph statistics for visualization consumers
//!
//! Reads a [`GraphModel`] through the algorithms crate and packages degree
//! ranking, the dense adjacency matrix and connectivity measures.

use crate::catalog::EntityId;
use crate::graph::{EdgeRecord, GraphModel};
use mention_graph_algorithms::{
    adjacency_matrix, connected_components, count_triangles, degrees, density, strengths,
    GraphView,
};
use ndarray::Array2;
use serde::Serialize;

/// One row of the degree ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeRank {
    pub id: EntityId,
    pub degree: usize,
    /// Weighted degree
    pub strength: u64,
}

/// Dense adjacency matrix with its explicit node ordering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    /// Row/column `i` belongs to `order[i]`
    pub order: Vec<EntityId>,
    pub values: Array2<u64>,
    /// Colour scale ceiling for heat maps; values are never clamped here
    pub display_clamp: Option<u64>,
}

impl AdjacencyMatrix {
    /// Cell value for two entities, `None` if either is not in `order`
    pub fn get(&self, row: &EntityId, col: &EntityId) -> Option<u64> {
        let r = self.order.iter().position(|id| id == row)?;
        let c = self.order.iter().position(|id| id == col)?;
        Some(self.values[[r, c]])
    }
}

/// Connectivity summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connectivity {
    /// Connected components, largest first; isolated entities are singletons
    pub components: Vec<Vec<EntityId>>,
    pub largest_component: usize,
    pub triangles: usize,
    pub density: f64,
}

/// Everything the presentation layer needs in one serializable bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_weight: u64,
    pub ranking: Vec<DegreeRank>,
    pub connectivity: Connectivity,
    pub edges: Vec<EdgeRecord>,
    pub adjacency: AdjacencyMatrix,
}

impl StatisticsReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Read-only statistics over one graph
pub struct StatisticsEngine<'g> {
    graph: &'g GraphModel,
    view: GraphView,
}

impl<'g> StatisticsEngine<'g> {
    pub fn new(graph: &'g GraphModel) -> Self {
        Self {
            graph,
            view: graph.view(),
        }
    }

    fn entity(&self, idx: usize) -> &'g EntityId {
        // View indices are catalog positions, see GraphModel::view
        &self.graph.nodes()[idx]
    }

    /// Nodes by degree descending, ties broken by identifier ascending
    pub fn degree_ranking(&self) -> Vec<DegreeRank> {
        let degrees = degrees(&self.view);
        let strengths = strengths(&self.view);

        let mut ranking: Vec<DegreeRank> = degrees
            .into_iter()
            .zip(strengths)
            .enumerate()
            .map(|(idx, (degree, strength))| DegreeRank {
                id: self.entity(idx).clone(),
                degree,
                strength,
            })
            .collect();
        ranking.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.id.cmp(&b.id)));
        ranking
    }

    /// Symmetric weight matrix in catalog order with a zero diagonal
    pub fn adjacency_matrix(&self, display_clamp: Option<u64>) -> AdjacencyMatrix {
        AdjacencyMatrix {
            order: self.graph.nodes().to_vec(),
            values: adjacency_matrix(&self.view),
            display_clamp,
        }
    }

    pub fn connectivity(&self) -> Connectivity {
        let result = connected_components(&self.view);
        let components = result
            .components
            .iter()
            .map(|members| {
                let mut ids: Vec<EntityId> = members
                    .iter()
                    .filter_map(|&node| self.graph.entity_for(node).cloned())
                    .collect();
                ids.sort();
                ids
            })
            .collect();

        Connectivity {
            components,
            largest_component: result.largest(),
            triangles: count_triangles(&self.view),
            density: density(&self.view),
        }
    }

    pub fn report(&self, display_clamp: Option<u64>) -> StatisticsReport {
        StatisticsReport {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            total_weight: self.graph.total_weight(),
            ranking: self.degree_ranking(),
            connectivity: self.connectivity(),
            edges: self.graph.edge_list(),
            adjacency: self.adjacency_matrix(display_clamp),
        }
    }
}
