use chrono::Datelike;

use super::super::domain::Points;
use super::super::validation::ValidatedReceipt;
use super::config::ScoringConfig;
use super::{RuleKind, ScoreComponent};

const ROUND_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;
const ITEM_PAIR_POINTS: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

// ceil(price * 0.2) in whole cents: ceil(cents / 500).
const DESCRIPTION_PRICE_DIVISOR: u64 = 500;

pub(crate) fn score_receipt(
    receipt: &ValidatedReceipt<'_>,
    bonus: Points,
    config: &ScoringConfig,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    let alphanumeric = receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as Points;
    if alphanumeric > 0 {
        components.push(ScoreComponent {
            rule: RuleKind::RetailerAlphanumeric,
            points: alphanumeric,
            notes: format!(
                "'{}' has {alphanumeric} alphanumeric characters",
                receipt.retailer
            ),
        });
    }

    let cents = receipt.total.cents_part();
    if cents == 0 {
        components.push(ScoreComponent {
            rule: RuleKind::RoundDollarTotal,
            points: ROUND_DOLLAR_POINTS,
            notes: "total is a round dollar amount".to_string(),
        });
    }
    if cents % 25 == 0 {
        components.push(ScoreComponent {
            rule: RuleKind::QuarterMultipleTotal,
            points: QUARTER_MULTIPLE_POINTS,
            notes: format!("total cents .{cents:02} is a multiple of 0.25"),
        });
    }

    let pairs = (receipt.items.len() / 2) as Points;
    if pairs > 0 {
        components.push(ScoreComponent {
            rule: RuleKind::ItemPairs,
            points: ITEM_PAIR_POINTS * pairs,
            notes: format!("{pairs} pair(s) of items"),
        });
    }

    for (index, item) in receipt.items.iter().enumerate() {
        let trimmed = item.short_description.trim();
        let length = trimmed.chars().count();
        if length == 0 || length % 3 != 0 {
            continue;
        }
        let points = item.price.total_cents().div_ceil(DESCRIPTION_PRICE_DIVISOR);
        if points > 0 {
            components.push(ScoreComponent {
                rule: RuleKind::DescriptionLength,
                points,
                notes: format!(
                    "item {index} '{trimmed}' trimmed length {length} is a multiple of 3"
                ),
            });
        }
    }

    let day = receipt.purchase_date.day();
    if day % 2 == 1 {
        components.push(ScoreComponent {
            rule: RuleKind::OddPurchaseDay,
            points: ODD_DAY_POINTS,
            notes: format!("purchase day {day} is odd"),
        });
    }

    let time = receipt.purchase_time;
    if time > config.afternoon_window_start && time < config.afternoon_window_end {
        components.push(ScoreComponent {
            rule: RuleKind::AfternoonPurchase,
            points: AFTERNOON_POINTS,
            notes: format!(
                "purchase time {} is between {} and {}",
                time.format("%H:%M"),
                config.afternoon_window_start.format("%H:%M"),
                config.afternoon_window_end.format("%H:%M")
            ),
        });
    }

    if bonus > 0 {
        components.push(ScoreComponent {
            rule: RuleKind::SubmitterBonus,
            points: bonus,
            notes: format!("first-use bonus of {bonus}"),
        });
    }

    components
}
