use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use receipt_points::receipts::{receipt_router, ReceiptService, ScoreStore};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_receipt_routes<S>(service: Arc<ReceiptService<S>>) -> axum::Router
where
    S: ScoreStore + 'static,
{
    receipt_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Acquire) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::in_memory_receipt_service;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use receipt_points::receipts::ScoringConfig;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(in_memory_receipt_service(ScoringConfig::default()));
        with_receipt_routes(service).layer(Extension(app_state(ready)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(false)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_tracks_listener_flag() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await, json!({ "status": "initializing" }));

        let response = app(true)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn metrics_are_exposed_as_prometheus_text() {
        let response = app(true)
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }

    #[tokio::test]
    async fn receipt_routes_are_mounted_alongside_operational_routes() {
        let router = app(true);
        let body = json!({
            "retailer": "Target",
            "total": "35.35",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
                { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
                { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
                { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
            ]
        });

        let response = router
            .clone()
            .oneshot(
                Request::post("/receipts/process")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let id = body_json(response).await["id"]
            .as_str()
            .expect("id returned")
            .to_string();

        let response = router
            .oneshot(
                Request::get(format!("/receipts/{id}/points"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "points": 28 }));
    }
}
