//! Co-mention aggregation
//!
//! Folds (subject, mention) events into an unordered-pair weight map.
//! Aggregation is commutative and associative, so partial aggregators built
//! over disjoint document sets can be merged in any order.

use crate::catalog::EntityId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unordered pair of distinct entities, stored as (smaller, larger)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityPair {
    low: EntityId,
    high: EntityId,
}

impl EntityPair {
    /// Canonical pair for `a` and `b`; `None` when they are the same entity
    pub fn new(a: EntityId, b: EntityId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(EntityPair { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(EntityPair { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> &EntityId {
        &self.low
    }

    pub fn high(&self) -> &EntityId {
        &self.high
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        &self.low == id || &self.high == id
    }

    /// The member that is not `id`
    pub fn other(&self, id: &EntityId) -> Option<&EntityId> {
        if &self.low == id {
            Some(&self.high)
        } else if &self.high == id {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for EntityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}

/// Accumulates pair weights from per-document mention sequences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeAggregator {
    weights: FxHashMap<EntityPair, u64>,
    self_mentions: u64,
}

impl EdgeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one mention of `mention` inside the document owned by `subject`.
    ///
    /// Self-mentions are counted for diagnostics and otherwise discarded.
    pub fn record(&mut self, subject: &EntityId, mention: &EntityId) {
        match EntityPair::new(subject.clone(), mention.clone()) {
            Some(pair) => *self.weights.entry(pair).or_insert(0) += 1,
            None => self.self_mentions += 1,
        }
    }

    /// Record every mention of one document
    pub fn absorb<'a, I>(&mut self, subject: &EntityId, mentions: I)
    where
        I: IntoIterator<Item = &'a EntityId>,
    {
        for mention in mentions {
            self.record(subject, mention);
        }
    }

    /// Sum another aggregator into this one
    pub fn merge(mut self, other: EdgeAggregator) -> Self {
        // Fold the smaller map into the larger one
        let (mut into, from) = if self.weights.len() >= other.weights.len() {
            (std::mem::take(&mut self.weights), other.weights)
        } else {
            (other.weights, std::mem::take(&mut self.weights))
        };
        for (pair, weight) in from {
            *into.entry(pair).or_insert(0) += weight;
        }
        EdgeAggregator {
            weights: into,
            self_mentions: self.self_mentions + other.self_mentions,
        }
    }

    /// Current weight of a pair, 0 if never mentioned
    pub fn weight(&self, a: &EntityId, b: &EntityId) -> u64 {
        EntityPair::new(a.clone(), b.clone())
            .and_then(|pair| self.weights.get(&pair).copied())
            .unwrap_or(0)
    }

    /// Number of discarded self-mention events
    pub fn self_mentions(&self) -> u64 {
        self.self_mentions
    }

    /// Number of distinct pairs with a positive weight
    pub fn pair_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &FxHashMap<EntityPair, u64> {
        &self.weights
    }

    pub fn into_weights(self) -> FxHashMap<EntityPair, u64> {
        self.weights
    }
}
