use crate::infra::in_memory_receipt_service;
use clap::Args;
use receipt_points::config::AppConfig;
use receipt_points::error::AppError;
use receipt_points::receipts::{PointsBreakdown, ProcessedReceipt, Receipt, SubmitterKey};
use receipt_points::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Submitter identity used for the first-use bonus (anonymous when omitted)
    #[arg(long)]
    pub(crate) submitter: Option<String>,
    /// Print the contribution of every scoring rule
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        receipt,
        submitter,
        explain,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let raw = std::fs::read_to_string(&receipt)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    let submitter = submitter.as_deref().and_then(SubmitterKey::parse);

    let service = in_memory_receipt_service(config.scoring);
    let processed = service.process(&receipt, submitter.as_ref())?;

    print!("{}", render_score(&processed, explain));
    Ok(())
}

fn render_score(processed: &ProcessedReceipt, explain: bool) -> String {
    let mut output = format!(
        "Receipt {}\n  points: {}\n",
        processed.id, processed.breakdown.total
    );
    if explain {
        output.push_str(&render_breakdown(&processed.breakdown));
    }
    output
}

fn render_breakdown(breakdown: &PointsBreakdown) -> String {
    if breakdown.components.is_empty() {
        return "  no scoring rules matched\n".to_string();
    }

    breakdown
        .components
        .iter()
        .map(|component| {
            format!(
                "  +{:<5} {:<24} {}\n",
                component.points,
                component.rule.label(),
                component.notes
            )
        })
        .collect()
}
