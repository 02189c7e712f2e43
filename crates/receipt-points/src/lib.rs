//! Receipt validation, reward point scoring, and the in-memory bookkeeping that
//! backs the receipt processor service.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
