use dashmap::DashMap;

use super::domain::{Points, SubmitterKey};

/// Counts prior scored submissions per submitter and hands out the decaying
/// first-use bonus: 1000, then 500, then 250, then nothing.
#[derive(Debug, Default)]
pub struct BonusTracker {
    processed: DashMap<SubmitterKey, u64>,
}

impl BonusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bonus for this submission and advances the submitter's count.
    ///
    /// The read and the increment happen under the same shard lock, so concurrent
    /// calls for one key each observe a distinct prior count.
    pub fn next_bonus(&self, key: &SubmitterKey) -> Points {
        let mut count = self.processed.entry(key.clone()).or_insert(0);
        let prior = *count;
        *count += 1;
        bonus_for(prior)
    }

    /// Number of submissions already scored for `key`.
    pub fn times_processed(&self, key: &SubmitterKey) -> u64 {
        self.processed.get(key).map(|count| *count).unwrap_or(0)
    }
}

/// Tightest matching tier wins.
pub fn bonus_for(times_processed: u64) -> Points {
    let mut bonus = 0;
    if times_processed < 3 {
        bonus = 250;
    }
    if times_processed < 2 {
        bonus = 500;
    }
    if times_processed < 1 {
        bonus = 1000;
    }
    bonus
}
