use crate::infra::AppState;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::{json, Map, Value};
use storage_dash::config::PageConfig;
use storage_dash::report::page::{dashboard_page, error_page, upload_page};
use storage_dash::report::views::DashboardSummary;
use storage_dash::report::MetricsRecord;
use tracing::info;

/// The dashboard surface: upload prompt, render-from-upload, JSON summary.
/// Stateless by design; every request renders from its own payload alone.
pub(crate) fn dashboard_router(page: PageConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/dashboard", post(upload_dashboard))
        .route("/api/v1/dashboard/summary", post(summary_endpoint))
        .layer(Extension(page))
}

pub(crate) fn with_ops_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn index(Extension(page): Extension<PageConfig>) -> Html<String> {
    Html(upload_page(&page.title).into_string())
}

/// Any file extension is accepted; only the content decides. The first
/// `file` field wins, a request without one re-renders the prompt.
pub(crate) async fn upload_dashboard(
    Extension(page): Extension<PageConfig>,
    mut multipart: Multipart,
) -> Response {
    let upload = match first_file_field(&mut multipart).await {
        Ok(upload) => upload,
        Err(err) => return ingest_failure(&page, &err.to_string()),
    };

    match upload {
        None => Html(upload_page(&page.title).into_string()).into_response(),
        Some(bytes) if bytes.is_empty() => {
            Html(upload_page(&page.title).into_string()).into_response()
        }
        Some(bytes) => match MetricsRecord::from_bytes(&bytes) {
            Ok(record) => {
                info!(bytes = bytes.len(), "metrics snapshot ingested");
                Html(dashboard_page(&page.title, &record.summary()).into_string()).into_response()
            }
            Err(err) => ingest_failure(&page, &err.to_string()),
        },
    }
}

fn ingest_failure(page: &PageConfig, detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Html(error_page(&page.title, detail).into_string()),
    )
        .into_response()
}

async fn first_file_field(multipart: &mut Multipart) -> Result<Option<Bytes>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            return field.bytes().await.map(Some);
        }
    }
    Ok(None)
}

/// JSON-in, JSON-out variant of the render cycle for headless consumers;
/// the extractor itself rejects malformed documents with failure detail.
pub(crate) async fn summary_endpoint(
    Json(document): Json<Map<String, Value>>,
) -> Json<DashboardSummary> {
    Json(MetricsRecord::from_object(&document).summary())
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
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
