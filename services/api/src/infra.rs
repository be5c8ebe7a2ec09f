use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::HeaderValue;
use course_api::config::CorsConfig;
use course_api::submissions::{DocumentStore, StorageError};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-wide document store. The persistence engine proper is an external
/// concern; this keeps collections in insertion order behind one mutex,
/// which is all the demo deployment and the test suite need.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<(), StorageError> {
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        guard.entry(collection.to_string()).or_default().push(document);
        Ok(())
    }

    async fn find(&self, collection: &str, limit: usize) -> Result<Vec<Value>, StorageError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard
            .get(collection)
            .map(|documents| documents.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Build the CORS layer from configuration. The wildcard default reflects
/// every origin without credentials; an explicit origin list additionally
/// allows credentialed requests, mirroring methods and headers since `*`
/// cannot be combined with credentials.
pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AnyOrigin => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::Origins(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_api::submissions::{ENROLLMENTS, STATUS_CHECKS};
    use serde_json::json;

    #[tokio::test]
    async fn store_keeps_collections_separate_and_ordered() {
        let store = InMemoryDocumentStore::default();

        store
            .insert(STATUS_CHECKS, json!({"client_name": "first"}))
            .await
            .expect("insert");
        store
            .insert(STATUS_CHECKS, json!({"client_name": "second"}))
            .await
            .expect("insert");
        store
            .insert(ENROLLMENTS, json!({"name": "John"}))
            .await
            .expect("insert");

        let checks = store.find(STATUS_CHECKS, 10).await.expect("find");
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0]["client_name"], "first");

        let enrollments = store.find(ENROLLMENTS, 10).await.expect("find");
        assert_eq!(enrollments.len(), 1);
    }

    #[tokio::test]
    async fn find_honors_the_limit() {
        let store = InMemoryDocumentStore::default();
        for i in 0..5 {
            store
                .insert(STATUS_CHECKS, json!({"client_name": format!("probe-{i}")}))
                .await
                .expect("insert");
        }

        let checks = store.find(STATUS_CHECKS, 3).await.expect("find");
        assert_eq!(checks.len(), 3);
        assert_eq!(checks[2]["client_name"], "probe-2");
    }
}
