//! Format checks applied to untrusted receipts before any points are computed.
//!
//! Validation short-circuits in a fixed order: item count, retailer, total,
//! purchase date, purchase time, then each item in sequence. The first failing
//! rule is reported through [`ValidationError`], which is meant for internal
//! diagnostics only; callers outside the service see a single generic message.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use super::domain::{Item, Receipt};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

static RETAILER_PATTERN: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_PATTERN: OnceLock<Regex> = OnceLock::new();
static AMOUNT_PATTERN: OnceLock<Regex> = OnceLock::new();
static DATE_SHAPE: OnceLock<Regex> = OnceLock::new();
static TIME_SHAPE: OnceLock<Regex> = OnceLock::new();

// Word and space classes are ASCII-only, so a valid description's char count
// equals its byte length.
fn retailer_pattern() -> &'static Regex {
    RETAILER_PATTERN.get_or_init(|| Regex::new(r"(?-u)^[\w\s\-&]+$").expect("valid regex"))
}

fn description_pattern() -> &'static Regex {
    DESCRIPTION_PATTERN.get_or_init(|| Regex::new(r"(?-u)^[\w\s\-]+$").expect("valid regex"))
}

fn amount_pattern() -> &'static Regex {
    AMOUNT_PATTERN.get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("valid regex"))
}

// chrono accepts unpadded fields, signs, and leading spaces, so the exact shape
// is checked before parsing.
fn date_shape() -> &'static Regex {
    DATE_SHAPE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"))
}

// Hours may be one or two digits; minutes are always two.
fn time_shape() -> &'static Regex {
    TIME_SHAPE.get_or_init(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("valid regex"))
}

/// Reason a receipt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("receipt must contain at least one item")]
    NoItems,
    #[error("retailer '{0}' must be letters, digits, spaces, '-' or '&'")]
    Retailer(String),
    #[error("total '{0}' is not a dollar amount with two decimal places")]
    Total(String),
    #[error("purchase date '{0}' is not a YYYY-MM-DD date")]
    PurchaseDate(String),
    #[error("purchase time '{0}' is not an HH:MM 24-hour time")]
    PurchaseTime(String),
    #[error("item {index} short description '{value}' must be letters, digits, spaces or '-'")]
    ItemDescription { index: usize, value: String },
    #[error("item {index} price '{value}' is not a dollar amount with two decimal places")]
    ItemPrice { index: usize, value: String },
}

impl ValidationError {
    /// Short rule name used in structured logs.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::NoItems => "item_count",
            ValidationError::Retailer(_) => "retailer",
            ValidationError::Total(_) => "total",
            ValidationError::PurchaseDate(_) => "purchase_date",
            ValidationError::PurchaseTime(_) => "purchase_time",
            ValidationError::ItemDescription { .. } => "item_description",
            ValidationError::ItemPrice { .. } => "item_price",
        }
    }
}

/// Decimal dollar amount held as whole cents.
///
/// The cent digits are kept exactly. The whole-cents value saturates at
/// `u64::MAX` for amounts too large to represent, so any `dollars.cc` string
/// parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    cents: u64,
    fraction: u8,
}

impl Amount {
    /// Parses `dollars.cc`. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        if !amount_pattern().is_match(raw) {
            return None;
        }
        let (dollars, fraction) = raw.split_once('.')?;
        let fraction: u8 = fraction.parse().ok()?;
        // Only overflow can fail here; the pattern guarantees digits.
        let dollars: u64 = dollars.parse().unwrap_or(u64::MAX);
        let cents = dollars
            .saturating_mul(100)
            .saturating_add(u64::from(fraction));
        Some(Self { cents, fraction })
    }

    pub fn from_cents(cents: u64) -> Self {
        Self {
            cents,
            fraction: (cents % 100) as u8,
        }
    }

    pub fn total_cents(self) -> u64 {
        self.cents
    }

    /// The two digits after the decimal point.
    pub fn cents_part(self) -> u64 {
        u64::from(self.fraction)
    }
}

/// A line item that passed validation, with its price parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem<'a> {
    pub short_description: &'a str,
    pub price: Amount,
}

/// Output of [`validate`]: the receipt's fields with amounts, date, and time parsed,
/// so scoring never has to handle malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt<'a> {
    pub retailer: &'a str,
    pub total: Amount,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidatedItem<'a>>,
}

/// Checks a receipt against the required formats.
pub fn validate(receipt: &Receipt) -> Result<ValidatedReceipt<'_>, ValidationError> {
    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    if !retailer_pattern().is_match(&receipt.retailer) {
        return Err(ValidationError::Retailer(receipt.retailer.clone()));
    }

    let total = Amount::parse(&receipt.total)
        .ok_or_else(|| ValidationError::Total(receipt.total.clone()))?;

    let purchase_date = Some(receipt.purchase_date.as_str())
        .filter(|raw| date_shape().is_match(raw))
        .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
        .ok_or_else(|| ValidationError::PurchaseDate(receipt.purchase_date.clone()))?;

    let purchase_time = Some(receipt.purchase_time.as_str())
        .filter(|raw| time_shape().is_match(raw))
        .and_then(|raw| NaiveTime::parse_from_str(raw, TIME_FORMAT).ok())
        .ok_or_else(|| ValidationError::PurchaseTime(receipt.purchase_time.clone()))?;

    let items = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedReceipt {
        retailer: &receipt.retailer,
        total,
        purchase_date,
        purchase_time,
        items,
    })
}

fn validate_item(index: usize, item: &Item) -> Result<ValidatedItem<'_>, ValidationError> {
    if !description_pattern().is_match(&item.short_description) {
        return Err(ValidationError::ItemDescription {
            index,
            value: item.short_description.clone(),
        });
    }

    let price = Amount::parse(&item.price).ok_or_else(|| ValidationError::ItemPrice {
        index,
        value: item.price.clone(),
    })?;

    Ok(ValidatedItem {
        short_description: &item.short_description,
        price,
    })
}
