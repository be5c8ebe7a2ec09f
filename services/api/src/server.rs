use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use course_api::config::AppConfig;
use course_api::error::AppError;
use course_api::submissions::{NoopSheetPublisher, SubmissionService};
use course_api::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{cors_layer, AppState, InMemoryDocumentStore};
use crate::routes::with_operational_routes;

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // One store handle for the process lifetime; dropped on shutdown.
    let store = Arc::new(InMemoryDocumentStore::default());
    let sheets = Arc::new(NoopSheetPublisher);
    let service = Arc::new(SubmissionService::new(store, sheets));

    let app = with_operational_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors_layer(&config.cors));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "course enrollment API ready");

    axum::serve(listener, app).await?;
    Ok(())
}
