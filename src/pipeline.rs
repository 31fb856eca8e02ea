//! End-to-end extraction pipeline
//!
//! corpus -> boilerplate filter -> mention extraction -> aggregation -> graph.
//! Per-document problems skip only that document; catalog problems abort.

use crate::aggregate::EdgeAggregator;
use crate::boilerplate::BoilerplateFilter;
use crate::catalog::{CatalogError, EntityCatalog, EntityId};
use crate::config::{ConfigError, PipelineConfig};
use crate::graph::{GraphError, GraphModel};
use crate::mention::MentionExtractor;
use crate::stats::{StatisticsEngine, StatisticsReport};
use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Problems confined to a single document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document subject {0} is not in the catalog")]
    UnknownEntity(EntityId),

    #[error("Document {0} is empty after boilerplate removal")]
    Empty(EntityId),
}

/// Run-level failures
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Failed to build mention matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Raw documents keyed by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: BTreeMap<EntityId, String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document
    pub fn insert(&mut self, id: impl Into<EntityId>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &EntityId) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.documents.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &str)> {
        self.documents.iter().map(|(id, text)| (id, text.as_str()))
    }
}

impl<K: Into<EntityId>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut corpus = Corpus::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}

/// A document left out of (or contributing nothing to) aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIssue {
    pub id: EntityId,
    pub error: DocumentError,
}

/// Result of one run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub graph: GraphModel,
    /// Documents excluded from aggregation
    pub skipped: Vec<DocumentIssue>,
    /// Documents that were empty after filtering and yielded no mentions
    pub empty: Vec<EntityId>,
    /// Discarded self-mention events
    pub self_mentions: u64,
    pub display_clamp: Option<u64>,
}

impl PipelineOutput {
    pub fn statistics(&self) -> StatisticsEngine<'_> {
        StatisticsEngine::new(&self.graph)
    }

    pub fn report(&self) -> StatisticsReport {
        self.statistics().report(self.display_clamp)
    }
}

/// Outcome of processing one document
enum DocumentOutcome {
    Aggregated,
    Empty(EntityId),
    Skipped(DocumentIssue),
}

/// Partial aggregation state, merged by summation
#[derive(Default)]
struct Partial {
    aggregator: EdgeAggregator,
    skipped: Vec<DocumentIssue>,
    empty: Vec<EntityId>,
}

impl Partial {
    fn merge(mut self, other: Partial) -> Partial {
        self.aggregator = self.aggregator.merge(other.aggregator);
        self.skipped.extend(other.skipped);
        self.empty.extend(other.empty);
        self
    }
}

/// Configured pipeline with a validated catalog
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    catalog: EntityCatalog,
    filter: BoilerplateFilter,
    extractor: MentionExtractor,
}

impl Pipeline {
    /// Validate `config` and derive the catalog from `identifiers`
    pub fn new<I, S>(config: PipelineConfig, identifiers: I) -> PipelineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let catalog = EntityCatalog::from_identifiers(identifiers, &config.identifiers)?;
        Self::with_catalog(config, catalog)
    }

    /// Catalog from the corpus's own document identifiers
    pub fn from_corpus(config: PipelineConfig, corpus: &Corpus) -> PipelineResult<Self> {
        Self::new(config, corpus.ids())
    }

    /// Use an already built catalog
    pub fn with_catalog(config: PipelineConfig, catalog: EntityCatalog) -> PipelineResult<Self> {
        config.validate()?;
        let filter = BoilerplateFilter::new(&config.boilerplate);
        let extractor = MentionExtractor::new(&catalog)?;
        info!(
            "Pipeline ready: {} entities, {} boilerplate fragments",
            catalog.len(),
            filter.len()
        );
        Ok(Self {
            config,
            catalog,
            filter,
            extractor,
        })
    }

    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Mentions of one document after boilerplate removal, without aggregating
    pub fn document_mentions(&self, subject: &EntityId, text: &str) -> Result<Vec<EntityId>, DocumentError> {
        if !self.catalog.contains(subject) {
            return Err(DocumentError::UnknownEntity(subject.clone()));
        }
        let filtered = self.filter.filter(text);
        if filtered.trim().is_empty() {
            return Err(DocumentError::Empty(subject.clone()));
        }
        Ok(self.extractor.extract(&filtered))
    }

    fn process(&self, subject: &EntityId, text: &str, aggregator: &mut EdgeAggregator) -> DocumentOutcome {
        if !self.catalog.contains(subject) {
            warn!("Skipping document {}: not in the catalog", subject);
            return DocumentOutcome::Skipped(DocumentIssue {
                id: subject.clone(),
                error: DocumentError::UnknownEntity(subject.clone()),
            });
        }

        let filtered = self.filter.filter(text);
        if filtered.trim().is_empty() {
            debug!("Document {} is empty after filtering", subject);
            return DocumentOutcome::Empty(subject.clone());
        }

        let mut found = 0usize;
        aggregator.absorb(
            subject,
            self.extractor.mentions(&filtered).inspect(|_| found += 1),
        );
        debug!("Document {}: {} mentions", subject, found);

        DocumentOutcome::Aggregated
    }

    fn fold_document(&self, mut partial: Partial, subject: &EntityId, text: &str) -> Partial {
        match self.process(subject, text, &mut partial.aggregator) {
            DocumentOutcome::Aggregated => {}
            DocumentOutcome::Empty(id) => partial.empty.push(id),
            DocumentOutcome::Skipped(issue) => partial.skipped.push(issue),
        }
        partial
    }

    /// Extract, aggregate and build the graph for the whole corpus
    pub fn run(&self, corpus: &Corpus) -> PipelineResult<PipelineOutput> {
        info!(
            "Processing {} documents ({})",
            corpus.len(),
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let mut partial = if self.config.parallel {
            let documents: Vec<(&EntityId, &str)> = corpus.iter().collect();
            documents
                .into_par_iter()
                .fold(Partial::default, |partial, (id, text)| {
                    self.fold_document(partial, id, text)
                })
                .reduce(Partial::default, Partial::merge)
        } else {
            corpus
                .iter()
                .fold(Partial::default(), |partial, (id, text)| {
                    self.fold_document(partial, id, text)
                })
        };
        // Parallel merge order is arbitrary
        partial.skipped.sort_by(|a, b| a.id.cmp(&b.id));
        partial.empty.sort();

        let self_mentions = partial.aggregator.self_mentions();
        let graph = GraphModel::from_weights(&self.catalog, partial.aggregator.weights())?;

        if !partial.skipped.is_empty() {
            warn!("{} documents skipped", partial.skipped.len());
        }
        info!(
            "Graph built: {} nodes, {} edges, total weight {}",
            graph.node_count(),
            graph.edge_count(),
            graph.total_weight()
        );

        Ok(PipelineOutput {
            graph,
            skipped: partial.skipped,
            empty: partial.empty,
            self_mentions,
            display_clamp: self.config.display_clamp,
        })
    }
}
