use dashmap::DashMap;

use super::domain::{Points, ReceiptId};

/// Storage abstraction so the service can be exercised against alternate backends.
///
/// Records are written once and never updated or removed.
pub trait ScoreStore: Send + Sync {
    /// Stores `points` under a freshly generated identifier.
    fn put(&self, points: Points) -> ReceiptId;
    fn get(&self, id: &ReceiptId) -> Option<Points>;
}

/// Process-lifetime store backed by a sharded concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    records: DashMap<ReceiptId, Points>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn put(&self, points: Points) -> ReceiptId {
        let id = ReceiptId::generate();
        self.records.insert(id.clone(), points);
        id
    }

    fn get(&self, id: &ReceiptId) -> Option<Points> {
        self.records.get(id).map(|points| *points)
    }
}
