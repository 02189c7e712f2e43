use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{BonusTracker, InMemoryScoreStore, ReceiptService, ScoringConfig};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One store and one bonus tracker per process, owned by the returned service.
pub(crate) fn in_memory_receipt_service(
    config: ScoringConfig,
) -> ReceiptService<InMemoryScoreStore> {
    ReceiptService::new(
        Arc::new(InMemoryScoreStore::new()),
        Arc::new(BonusTracker::new()),
        config,
    )
}
