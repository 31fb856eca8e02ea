//! Mention Graph
//!
//! Extracts cross-references between ministries from their mandate letters
//! and aggregates them into a weighted undirected graph.
//!
//! # Pipeline
//!
//! - `catalog`: canonical entities and the surface names matched in text
//! - `boilerplate`: line-level removal of template sentences
//! - `mention`: longest-match, word-aligned mention scanner
//! - `aggregate`: unordered-pair weight accumulation, self-mentions dropped
//! - `graph`: immutable weighted graph, isolated entities included
//! - `stats`: degree ranking, adjacency matrix, connectivity
//!
//! Document acquisition and rendering live outside this crate; the pipeline
//! consumes an in-memory [`Corpus`] and hands back a [`GraphModel`].
//!
//! ## Example Usage
//!
//! ```rust
//! use mention_graph::{Corpus, EntityId, Pipeline, PipelineConfig};
//!
//! let corpus: Corpus = [
//!     ("ministry-of-alpha-mandate-letter", "Beta and beta again. Alpha too."),
//!     ("ministry-of-beta-mandate-letter", "Alpha."),
//! ]
//! .into_iter()
//! .collect();
//!
//! let pipeline = Pipeline::from_corpus(PipelineConfig::default(), &corpus).unwrap();
//! let output = pipeline.run(&corpus).unwrap();
//!
//! let a = EntityId::new("ministry-of-alpha-mandate-letter");
//! let b = EntityId::new("ministry-of-beta-mandate-letter");
//! assert_eq!(output.graph.weight(&a, &b).unwrap(), 3);
//!
//! let ranking = output.statistics().degree_ranking();
//! assert_eq!(ranking[0].degree, 1);
//! ```

#![warn(clippy::all)]

pub mod aggregate;
pub mod boilerplate;
pub mod catalog;
pub mod config;
pub mod graph;
pub mod mention;
pub mod pipeline;
pub mod stats;

// Re-export main types for convenience
pub use aggregate::{EdgeAggregator, EntityPair};
pub use boilerplate::BoilerplateFilter;
pub use catalog::{CatalogError, CatalogResult, Entity, EntityCatalog, EntityId};
pub use config::{ConfigError, ConfigResult, IdentifierConvention, PipelineConfig};
pub use graph::{EdgeRecord, GraphError, GraphModel, GraphResult};
pub use mention::{MentionExtractor, Mentions};
pub use pipeline::{
    Corpus, DocumentError, DocumentIssue, Pipeline, PipelineError, PipelineOutput, PipelineResult,
};
pub use stats::{
    AdjacencyMatrix, Connectivity, DegreeRank, StatisticsEngine, StatisticsReport,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
