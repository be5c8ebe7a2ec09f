use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::service::{SubmissionError, SubmissionService};
use super::sheets::SheetPublisher;
use super::storage::DocumentStore;
use crate::catalog::{course_modules, filter_modules};
use crate::forms::{ContactForm, EnrollmentForm, StatusCheckCreate};

/// Router exposing the `/api` surface backed by a submission service.
pub fn submission_router<S, P>(service: Arc<SubmissionService<S, P>>) -> Router
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    Router::new()
        .route("/api/", get(welcome_handler))
        .route("/api/health", get(health_handler::<S, P>))
        .route("/api/courses", get(list_courses_handler))
        .route("/api/courses/filter", get(filter_courses_handler))
        .route("/api/enroll", post(enroll_handler::<S, P>))
        .route("/api/contact", post(contact_handler::<S, P>))
        .route(
            "/api/status",
            post(create_status_handler::<S, P>).get(list_status_handler::<S, P>),
        )
        .with_state(service)
}

async fn welcome_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "SDET Course API - Welcome to the future of Software Testing!",
    }))
}

/// Always HTTP 200; an unhealthy store shows up in the payload, and the
/// hard readiness signal lives on the service binary's `/ready` route.
async fn health_handler<S, P>(
    State(service): State<Arc<SubmissionService<S, P>>>,
) -> impl IntoResponse
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    Json(service.health().await)
}

async fn list_courses_handler() -> Json<serde_json::Value> {
    let modules = course_modules();
    Json(json!({
        "status": "success",
        "data": modules,
        "total_courses": modules.len(),
    }))
}

#[derive(Debug, Default, Deserialize)]
struct CourseFilterParams {
    level: Option<String>,
    duration: Option<String>,
}

async fn filter_courses_handler(
    Query(params): Query<CourseFilterParams>,
) -> Json<serde_json::Value> {
    let matches = filter_modules(params.level.as_deref(), params.duration.as_deref());
    Json(json!({
        "status": "success",
        "data": matches,
        "total_courses": matches.len(),
        "filters_applied": {
            "level": params.level,
            "duration": params.duration,
        },
    }))
}

async fn enroll_handler<S, P>(
    State(service): State<Arc<SubmissionService<S, P>>>,
    Json(form): Json<EnrollmentForm>,
) -> Response
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    match service.submit_enrollment(form).await {
        Ok(record) => {
            let payload = json!({
                "status": "success",
                "message": "Enrollment submitted successfully! Our team will contact you within 24 hours.",
                "enrollment_id": record.id,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => rejection(err, "Failed to submit enrollment. Please try again later."),
    }
}

async fn contact_handler<S, P>(
    State(service): State<Arc<SubmissionService<S, P>>>,
    Json(form): Json<ContactForm>,
) -> Response
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    match service.submit_contact(form).await {
        Ok(record) => {
            let payload = json!({
                "status": "success",
                "message": "Thank you for contacting us! We'll get back to you soon.",
                "contact_id": record.id,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => rejection(err, "Failed to submit contact form. Please try again later."),
    }
}

async fn create_status_handler<S, P>(
    State(service): State<Arc<SubmissionService<S, P>>>,
    Json(input): Json<StatusCheckCreate>,
) -> Response
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    match service.create_status_check(input).await {
        Ok(check) => (StatusCode::OK, Json(check)).into_response(),
        Err(err) => rejection(err, "Failed to record status check. Please try again later."),
    }
}

async fn list_status_handler<S, P>(
    State(service): State<Arc<SubmissionService<S, P>>>,
) -> Response
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    match service.list_status_checks().await {
        Ok(checks) => (StatusCode::OK, Json(checks)).into_response(),
        Err(err) => rejection(err, "Failed to list status checks. Please try again later."),
    }
}

/// Map service failures onto the HTTP contract: every failing field on a
/// 422, a generic message on a 500 with the detail kept in the logs.
fn rejection(err: SubmissionError, storage_message: &str) -> Response {
    match err {
        SubmissionError::Validation(errors) => {
            let payload = json!({
                "status": "error",
                "message": "Validation failed",
                "errors": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        other => {
            error!("submission failed: {other}");
            let payload = json!({
                "status": "error",
                "message": storage_message,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn welcome_mentions_the_course_api() {
        let Json(body) = welcome_handler().await;
        let message = body["message"].as_str().expect("message present");
        assert!(message.contains("SDET Course API"));
    }

    #[tokio::test]
    async fn list_courses_envelope_counts_the_catalog() {
        let Json(body) = list_courses_handler().await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["total_courses"], 6);
        assert_eq!(body["data"].as_array().expect("data array").len(), 6);
    }

    #[tokio::test]
    async fn filter_envelope_echoes_applied_filters() {
        let params = CourseFilterParams {
            level: Some("Advanced".to_string()),
            duration: None,
        };
        let Json(body) = filter_courses_handler(Query(params)).await;
        assert_eq!(body["total_courses"], 3);
        assert_eq!(body["filters_applied"]["level"], "Advanced");
        assert!(body["filters_applied"]["duration"].is_null());
    }
}
