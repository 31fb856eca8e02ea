//! Edge records for export

use crate::aggregate::EntityPair;
use crate::catalog::EntityId;
use serde::{Deserialize, Serialize};

/// One undirected edge, `source < target` by identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: EntityId,
    pub target: EntityId,
    pub weight: u64,
}

impl EdgeRecord {
    pub fn new(pair: &EntityPair, weight: u64) -> Self {
        EdgeRecord {
            source: pair.low().clone(),
            target: pair.high().clone(),
            weight,
        }
    }

    /// The unordered pair this edge connects
    pub fn pair(&self) -> Option<EntityPair> {
        EntityPair::new(self.source.clone(), self.target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_pair_is_ordered() {
        let pair = EntityPair::new(EntityId::new("b"), EntityId::new("a")).unwrap();
        let record = EdgeRecord::new(&pair, 4);
        assert_eq!(record.source.as_str(), "a");
        assert_eq!(record.target.as_str(), "b");
        assert_eq!(record.pair(), Some(pair));
    }

    #[test]
    fn test_serializes_flat() {
        let pair = EntityPair::new(EntityId::new("a"), EntityId::new("b")).unwrap();
        let json = serde_json::to_value(EdgeRecord::new(&pair, 2)).unwrap();
        assert_eq!(json, serde_json::json!({"source": "a", "target": "b", "weight": 2}));
    }
}
