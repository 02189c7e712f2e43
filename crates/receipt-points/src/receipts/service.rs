use std::sync::Arc;

use tracing::{debug, info, warn};

use super::bonus::BonusTracker;
use super::domain::{Points, Receipt, ReceiptId, SubmitterKey};
use super::scoring::{PointsBreakdown, ScoringConfig, ScoringEngine};
use super::store::ScoreStore;
use super::validation::{validate, ValidationError};

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Service composing validation, scoring, the bonus tracker, and the score store.
pub struct ReceiptService<S> {
    store: Arc<S>,
    bonuses: Arc<BonusTracker>,
    engine: ScoringEngine,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedReceipt {
    pub id: ReceiptId,
    pub breakdown: PointsBreakdown,
}

impl<S> ReceiptService<S>
where
    S: ScoreStore + 'static,
{
    pub fn new(store: Arc<S>, bonuses: Arc<BonusTracker>, config: ScoringConfig) -> Self {
        Self {
            store,
            bonuses,
            engine: ScoringEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Validate, score, and store a receipt, returning its new identifier.
    ///
    /// Anonymous submissions (`submitter == None`) earn no bonus and leave the
    /// bonus tracker untouched.
    pub fn submit(
        &self,
        receipt: &Receipt,
        submitter: Option<&SubmitterKey>,
    ) -> Result<ReceiptId, ReceiptServiceError> {
        self.process(receipt, submitter).map(|processed| processed.id)
    }

    /// Same pipeline as [`submit`](Self::submit), also returning the per-rule breakdown.
    pub fn process(
        &self,
        receipt: &Receipt,
        submitter: Option<&SubmitterKey>,
    ) -> Result<ProcessedReceipt, ReceiptServiceError> {
        let validated = validate(receipt).map_err(|err| {
            warn!(rule = err.rule(), error = %err, "receipt rejected");
            err
        })?;

        let bonus = submitter.map_or(0, |key| self.bonuses.next_bonus(key));
        let breakdown = self.engine.breakdown(&validated, bonus);
        let id = self.store.put(breakdown.total);

        info!(
            receipt_id = %id,
            points = breakdown.total,
            bonus,
            submitter = ?submitter,
            "receipt processed"
        );

        Ok(ProcessedReceipt { id, breakdown })
    }

    /// Look up the points for an identifier returned by [`submit`](Self::submit).
    pub fn points(&self, raw_id: &str) -> Result<Points, ReceiptServiceError> {
        if !is_well_formed_id(raw_id) {
            debug!(receipt_id = raw_id, "malformed receipt id");
            return Err(ReceiptServiceError::NotFound);
        }

        let id = ReceiptId(raw_id.to_string());
        match self.store.get(&id) {
            Some(points) => {
                debug!(receipt_id = %id, points, "receipt points retrieved");
                Ok(points)
            }
            None => {
                debug!(receipt_id = %id, "receipt id not found");
                Err(ReceiptServiceError::NotFound)
            }
        }
    }
}

// Non-empty with no ASCII whitespace (space, tab, LF, FF, CR). Other Unicode
// spaces are allowed through and simply miss in the store.
fn is_well_formed_id(raw: &str) -> bool {
    !raw.is_empty() && !raw.bytes().any(|byte| byte.is_ascii_whitespace())
}

/// Error raised by the receipt service. Display strings are the public messages;
/// the underlying validation failure is only reachable through `source()`.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error("The receipt is invalid.")]
    InvalidReceipt(#[from] ValidationError),
    #[error("No receipt found for that ID.")]
    NotFound,
}
