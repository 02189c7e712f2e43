mod config;
mod rules;

pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Points;
use super::validation::ValidatedReceipt;

/// The independent rules that contribute to a receipt's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    RetailerAlphanumeric,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
    SubmitterBonus,
}

impl RuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::RetailerAlphanumeric => "retailer_alphanumeric",
            RuleKind::RoundDollarTotal => "round_dollar_total",
            RuleKind::QuarterMultipleTotal => "quarter_multiple_total",
            RuleKind::ItemPairs => "item_pairs",
            RuleKind::DescriptionLength => "description_length",
            RuleKind::OddPurchaseDay => "odd_purchase_day",
            RuleKind::AfternoonPurchase => "afternoon_purchase",
            RuleKind::SubmitterBonus => "submitter_bonus",
        }
    }
}

/// Discrete contribution to a receipt's points, kept for audits and `--explain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: RuleKind,
    pub points: Points,
    pub notes: String,
}

/// Every non-zero contribution along with their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub total: Points,
    pub components: Vec<ScoreComponent>,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: RuleKind) -> Points {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .fold(0, |sum: Points, component| sum.saturating_add(component.points))
    }
}

/// Stateless calculator applying the scoring rules to a validated receipt.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Total points for `receipt`, with `bonus` added verbatim.
    pub fn calculate(&self, receipt: &ValidatedReceipt<'_>, bonus: Points) -> Points {
        self.breakdown(receipt, bonus).total
    }

    /// Per-rule contributions. Each one is also emitted as a debug event.
    pub fn breakdown(&self, receipt: &ValidatedReceipt<'_>, bonus: Points) -> PointsBreakdown {
        let components = rules::score_receipt(receipt, bonus, &self.config);

        for component in &components {
            debug!(
                rule = component.rule.label(),
                points = component.points,
                notes = %component.notes,
                "scoring rule applied"
            );
        }

        // Saturates so oversized prices cannot overflow the total.
        let total = components
            .iter()
            .fold(0, |sum: Points, component| sum.saturating_add(component.points));
        PointsBreakdown { total, components }
    }
}
