use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Tunable bounds for the time-of-day rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Purchases strictly after this time qualify.
    pub afternoon_window_start: NaiveTime,
    /// Purchases strictly before this time qualify. Defaults to 18:00, which is
    /// what the reference service awards; set 16:00 for a 2-4pm window.
    pub afternoon_window_end: NaiveTime,
}

impl ScoringConfig {
    pub fn with_afternoon_window_end(mut self, end: NaiveTime) -> Self {
        self.afternoon_window_end = end;
        self
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            afternoon_window_start: NaiveTime::from_hms_opt(14, 0, 0).expect("valid time"),
            afternoon_window_end: NaiveTime::from_hms_opt(18, 0, 0).expect("valid time"),
        }
    }
}
