use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveTime;
use serde_json::Value;

use crate::receipts::bonus::BonusTracker;
use crate::receipts::domain::{Item, Points, Receipt, ReceiptId, SubmitterKey};
use crate::receipts::scoring::{ScoringConfig, ScoringEngine};
use crate::receipts::service::ReceiptService;
use crate::receipts::store::{InMemoryScoreStore, ScoreStore};

pub(super) fn target_receipt() -> Receipt {
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

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        total: "9.00".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![Item::new("Gatorade", "2.25"); 4],
    }
}

/// Scores 25 with an 18:00 window end and 15 with 16:00.
pub(super) fn late_afternoon_receipt() -> Receipt {
    Receipt {
        retailer: "Walgreens".to_string(),
        total: "2.65".to_string(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "17:30".to_string(),
        items: vec![
            Item::new("Pepsi - 12-oz", "1.25"),
            Item::new("Dasani", "1.40"),
        ],
    }
}

pub(super) fn four_pm_config() -> ScoringConfig {
    ScoringConfig::default()
        .with_afternoon_window_end(NaiveTime::from_hms_opt(16, 0, 0).expect("valid time"))
}

pub(super) fn submitter(raw: &str) -> SubmitterKey {
    SubmitterKey(raw.to_string())
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn build_service() -> (
    ReceiptService<InMemoryScoreStore>,
    Arc<InMemoryScoreStore>,
    Arc<BonusTracker>,
) {
    let store = Arc::new(InMemoryScoreStore::new());
    let bonuses = Arc::new(BonusTracker::new());
    let service = ReceiptService::new(store.clone(), bonuses.clone(), ScoringConfig::default());
    (service, store, bonuses)
}

/// Store wrapper counting lookups so tests can prove a request never reached it.
#[derive(Default)]
pub(super) struct CountingStore {
    inner: InMemoryScoreStore,
    lookups: AtomicUsize,
}

impl CountingStore {
    pub(super) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ScoreStore for CountingStore {
    fn put(&self, points: Points) -> ReceiptId {
        self.inner.put(points)
    }

    fn get(&self, id: &ReceiptId) -> Option<Points> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id)
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_text_body(response: Response) -> String {
    String::from_utf8(read_body(response).await).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json payload")
}
