//! Receipt intake, validation, scoring, and points lookup.

pub mod bonus;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use bonus::BonusTracker;
pub use domain::{
    Item, Points, PointsResponse, ProcessReceiptResponse, Receipt, ReceiptId, SubmitterKey,
};
pub use router::{receipt_router, SUBMITTER_HEADER};
pub use scoring::{PointsBreakdown, RuleKind, ScoreComponent, ScoringConfig, ScoringEngine};
pub use service::{
    ProcessedReceipt, ReceiptService, ReceiptServiceError, INVALID_RECEIPT_MESSAGE,
    NOT_FOUND_MESSAGE,
};
pub use store::{InMemoryScoreStore, ScoreStore};
pub use validation::{validate, Amount, ValidatedReceipt, ValidationError};
