use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::warn;

use super::domain::{PointsResponse, ProcessReceiptResponse, Receipt, SubmitterKey};
use super::service::{
    ReceiptService, ReceiptServiceError, INVALID_RECEIPT_MESSAGE, NOT_FOUND_MESSAGE,
};
use super::store::ScoreStore;

/// Header carrying the caller identity used for the first-use bonus.
pub const SUBMITTER_HEADER: &str = "x-submitter-id";

pub const PROCESS_RECEIPT_PATH: &str = "/receipts/process";
pub const RECEIPT_POINTS_PATH: &str = "/receipts/:id/points";

/// Router builder exposing the receipt submission and points lookup endpoints.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ScoreStore + 'static,
{
    Router::new()
        .route(PROCESS_RECEIPT_PATH, post(submit_handler::<S>))
        .route(RECEIPT_POINTS_PATH, get(points_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: ScoreStore + 'static,
{
    // Decoded regardless of Content-Type; only malformed payloads are rejected.
    let receipt: Receipt = match serde_json::from_slice(&body) {
        Ok(receipt) => receipt,
        Err(err) => {
            warn!(error = %err, "receipt payload could not be decoded");
            return (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE).into_response();
        }
    };

    let submitter = submitter_from_headers(&headers);
    match service.submit(&receipt, submitter.as_ref()) {
        Ok(id) => (StatusCode::OK, Json(ProcessReceiptResponse { id })).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: ScoreStore + 'static,
{
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(PointsResponse { points })).into_response(),
        Err(err) => error_response(err),
    }
}

fn submitter_from_headers(headers: &HeaderMap) -> Option<SubmitterKey> {
    headers
        .get(SUBMITTER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(SubmitterKey::parse)
}

fn error_response(err: ReceiptServiceError) -> Response {
    match err {
        ReceiptServiceError::InvalidReceipt(_) => {
            (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE).into_response()
        }
        ReceiptServiceError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
    }
}
