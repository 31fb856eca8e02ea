//! Weighted undirected co-mention graph
//!
//! - Every catalog entity is a node, including entities with no edges
//! - One edge per unordered pair of distinct entities, weight >= 1
//! - No self-loops

pub mod edge;
pub mod model;

// Re-export main types
pub use edge::EdgeRecord;
pub use model::{GraphError, GraphModel, GraphResult};
