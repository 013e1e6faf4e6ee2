use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use rentwise::analysis::{
    recompute, AnalysisRequest, AnalysisResult, Overrides, Recalculation,
};
use rentwise::error::AppError;

/// Recompute payload: a previously returned report plus the what-if
/// slider values to substitute.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecomputeRequest {
    pub(crate) analysis: AnalysisResult,
    #[serde(default)]
    pub(crate) overrides: Overrides,
}

pub(crate) fn with_analysis_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/analysis", axum::routing::post(analysis_endpoint))
        .route(
            "/api/v1/analysis/recompute",
            axum::routing::post(recompute_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
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

pub(crate) async fn analysis_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = state.engine.analyze(payload)?;
    Ok(Json(result))
}

pub(crate) async fn recompute_endpoint(
    Json(payload): Json<RecomputeRequest>,
) -> Json<Recalculation> {
    let RecomputeRequest {
        analysis,
        overrides,
    } = payload;

    Json(recompute(&analysis, &overrides))
}
