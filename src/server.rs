use crate::cli::ServeArgs;
use crate::infra::{in_memory_receipt_service, AppState};
use crate::routes::with_receipt_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use receipt_points::config::AppConfig;
use receipt_points::error::AppError;
use receipt_points::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let receipt_service = Arc::new(in_memory_receipt_service(config.scoring));

    let app = with_receipt_routes(receipt_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        afternoon_window_end = %config.scoring.afternoon_window_end,
        "receipt processor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
