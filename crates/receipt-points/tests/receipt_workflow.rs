//! End-to-end scenarios for receipt submission and points lookup, exercised only
//! through the public service facade.

use std::sync::Arc;

use receipt_points::receipts::{
    validate, BonusTracker, InMemoryScoreStore, Item, Receipt, ReceiptService,
    ReceiptServiceError, ScoringConfig, SubmitterKey, INVALID_RECEIPT_MESSAGE, NOT_FOUND_MESSAGE,
};

fn service() -> ReceiptService<InMemoryScoreStore> {
    ReceiptService::new(
        Arc::new(InMemoryScoreStore::new()),
        Arc::new(BonusTracker::new()),
        ScoringConfig::default(),
    )
}

fn valid_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        total: "35.35".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

#[test]
fn rejection_scenarios_share_one_public_message() {
    let service = service();

    let mut no_items = valid_receipt();
    no_items.items.clear();

    let mut empty_retailer = valid_receipt();
    empty_retailer.retailer = String::new();

    let mut bad_total = valid_receipt();
    bad_total.total = "NOT a total".to_string();

    let mut bad_date = valid_receipt();
    bad_date.purchase_date = "Jan 01".to_string();

    let mut bad_time = valid_receipt();
    bad_time.purchase_time = "8:00 PM".to_string();

    let mut bad_item = valid_receipt();
    bad_item.items[4].price = "NOT a price".to_string();

    for receipt in [no_items, empty_retailer, bad_total, bad_date, bad_time, bad_item] {
        assert!(validate(&receipt).is_err());
        match service.submit(&receipt, None) {
            Err(err @ ReceiptServiceError::InvalidReceipt(_)) => {
                assert_eq!(err.to_string(), INVALID_RECEIPT_MESSAGE);
            }
            other => panic!("expected invalid receipt, got {other:?}"),
        }
    }
}

#[test]
fn submitted_receipts_are_queryable_until_shutdown() {
    let service = service();
    let key = SubmitterKey::parse("  harper ").expect("non-blank key");
    assert_eq!(key.0, "harper");

    let ids: Vec<_> = (0..4)
        .map(|_| service.submit(&valid_receipt(), Some(&key)).expect("accepted"))
        .collect();

    let points: Vec<_> = ids
        .iter()
        .map(|id| service.points(id.as_str()).expect("stored"))
        .collect();
    assert_eq!(points, vec![1028, 528, 278, 28]);

    // Lookups do not consume or alter records.
    assert_eq!(service.points(ids[0].as_str()).expect("stored"), 1028);
}

#[test]
fn identifiers_never_issued_are_not_found() {
    let service = service();
    service.submit(&valid_receipt(), None).expect("accepted");

    for raw in ["", "no such id", "00000000-0000-0000-0000-000000000000"] {
        match service.points(raw) {
            Err(err @ ReceiptServiceError::NotFound) => {
                assert_eq!(err.to_string(), NOT_FOUND_MESSAGE)
            }
            other => panic!("expected not found for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn independent_services_do_not_share_state() {
    let first = service();
    let second = service();
    let key = SubmitterKey("ivy".to_string());

    let id = first.submit(&valid_receipt(), Some(&key)).expect("accepted");
    assert!(second.points(id.as_str()).is_err());

    let id = second.submit(&valid_receipt(), Some(&key)).expect("accepted");
    assert_eq!(second.points(id.as_str()).expect("stored"), 1028);
}
