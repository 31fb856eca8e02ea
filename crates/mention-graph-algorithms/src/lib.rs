pub mod common;
pub mod degree;
pub mod matrix;
pub mod community;
pub mod topology;

pub use common::{GraphView, NodeId};
pub use degree::{degrees, strengths};
pub use matrix::adjacency_matrix;
pub use community::{connected_components, ComponentsResult};
pub use topology::{count_triangles, density};
