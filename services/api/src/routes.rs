use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use course_api::submissions::{
    submission_router, DocumentStore, SheetPublisher, SubmissionService,
};

use crate::infra::AppState;

/// All `/api` routes from the library plus the binary's operational
/// endpoints: a hard readiness signal and the Prometheus scrape target.
pub(crate) fn with_operational_routes<S, P>(
    service: Arc<SubmissionService<S, P>>,
) -> axum::Router
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    submission_router(service)
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
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
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    use course_api::submissions::NoopSheetPublisher;

    use crate::infra::InMemoryDocumentStore;

    fn test_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(
                PrometheusBuilder::new()
                    .build_recorder()
                    .handle(),
            ),
        }
    }

    fn build_router(ready: bool) -> axum::Router {
        let store = Arc::new(InMemoryDocumentStore::default());
        let sheets = Arc::new(NoopSheetPublisher);
        let service = Arc::new(SubmissionService::new(store, sheets));
        with_operational_routes(service).layer(Extension(test_state(ready)))
    }

    #[tokio::test]
    async fn readiness_reports_503_until_flagged() {
        let response = build_router(false)
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = build_router(true)
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_routes_are_mounted_alongside_operational_ones() {
        let response = build_router(true)
            .oneshot(
                Request::builder()
                    .uri("/api/courses")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
