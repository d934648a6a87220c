//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Reads take the dashboard read lock. An achievement edit takes the write
//! lock for the replace-and-recompute, so readers never see a KPI whose
//! status lags its achievement.
//!
//! Extractor rejections (bad JSON, non-numeric path ids, bad query strings)
//! are answered with 400 and the endpoint's own `{ "success": false }` body.

use super::{
    AppState,
    types::{
        ChartQuery, ChartResponse, ClassifyRequest, ClassifyResponse, ExportRequest,
        ExportResponse, HealthResponse, KpiListResponse, KpiQuery, KpiResponse, PobInfo,
        PobListResponse, RecommendationsResponse, SummaryResponse, UpdateAchievementRequest,
    },
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use pob_kpi_core::{ChartKind, KpiId, KpiSort, PobError, export_csv};

/// HTTP status for a core error.
fn error_status(error: &PobError) -> StatusCode {
    match error {
        PobError::PobNotFound(_) | PobError::KpiNotFound(_) => StatusCode::NOT_FOUND,
        PobError::EmptyAchievement
        | PobError::InvalidAchievement(_)
        | PobError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        PobError::Serialization(_) | PobError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// POB HANDLERS
// =============================================================================

/// List every POB.
pub async fn list_pobs_handler(State(state): State<AppState>) -> impl IntoResponse {
    let dashboard = state.dashboard.read().await;
    let response = PobListResponse {
        success: true,
        pobs: dashboard.scorecards().map(PobInfo::from).collect(),
    };
    (StatusCode::OK, Json(response))
}

/// Filtered, sorted KPI list.
pub async fn list_kpis_handler(
    State(state): State<AppState>,
    Path(pob): Path<String>,
    query: Result<Query<KpiQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(KpiListResponse::error(rejection.body_text())),
            );
        }
    };
    let (filter, sort) = match query.to_view() {
        Ok(view) => view,
        Err(e) => return (error_status(&e), Json(KpiListResponse::error(e.to_string()))),
    };

    let dashboard = state.dashboard.read().await;
    match dashboard.get(&pob) {
        Ok(card) => {
            let kpis = card.view(&filter, &sort);
            (StatusCode::OK, Json(KpiListResponse::success(&pob, &kpis)))
        }
        Err(e) => (error_status(&e), Json(KpiListResponse::error(e.to_string()))),
    }
}

/// One KPI.
pub async fn get_kpi_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, u32)>, PathRejection>,
) -> impl IntoResponse {
    let Path((pob, id)) = match path {
        Ok(path) => path,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(KpiResponse::error(rejection.body_text())),
            );
        }
    };

    let dashboard = state.dashboard.read().await;
    match dashboard.get(&pob).and_then(|card| card.get(KpiId(id))) {
        Ok(kpi) => (StatusCode::OK, Json(KpiResponse::success(kpi))),
        Err(e) => (error_status(&e), Json(KpiResponse::error(e.to_string()))),
    }
}

/// Replace an achievement and return the reclassified KPI with the new summary.
pub async fn update_achievement_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, u32)>, PathRejection>,
    body: Result<Json<UpdateAchievementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Path((pob, id)) = match path {
        Ok(path) => path,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(KpiResponse::error(rejection.body_text())),
            );
        }
    };
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(pob = %pob, kpi = id, "Unreadable achievement body: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(KpiResponse::error(rejection.body_text())),
            );
        }
    };
    let input = match request.achievement.to_text() {
        Ok(input) => input,
        Err(e) => return (error_status(&e), Json(KpiResponse::error(e.to_string()))),
    };

    let mut dashboard = state.dashboard.write().await;
    let card = match dashboard.get_mut(&pob) {
        Ok(card) => card,
        Err(e) => return (error_status(&e), Json(KpiResponse::error(e.to_string()))),
    };

    let kpi = match card.update_achievement(KpiId(id), &input) {
        Ok(kpi) => kpi.clone(),
        Err(e) => {
            tracing::debug!(pob = %pob, kpi = id, "Rejected achievement edit: {}", e);
            return (error_status(&e), Json(KpiResponse::error(e.to_string())));
        }
    };

    tracing::info!(
        pob = %pob,
        kpi = id,
        achievement = %kpi.achievement(),
        status = %kpi.status(),
        "Achievement updated"
    );
    (
        StatusCode::OK,
        Json(KpiResponse::updated(&kpi, card.summary())),
    )
}

/// Tier counts and percentages.
pub async fn summary_handler(
    State(state): State<AppState>,
    Path(pob): Path<String>,
) -> impl IntoResponse {
    let dashboard = state.dashboard.read().await;
    match dashboard.get(&pob) {
        Ok(card) => (StatusCode::OK, Json(SummaryResponse::success(card))),
        Err(e) => (error_status(&e), Json(SummaryResponse::error(e.to_string()))),
    }
}

/// Remediation narratives for KPIs that need attention.
pub async fn recommendations_handler(
    State(state): State<AppState>,
    Path(pob): Path<String>,
) -> impl IntoResponse {
    let dashboard = state.dashboard.read().await;
    match dashboard.get(&pob) {
        Ok(card) => (
            StatusCode::OK,
            Json(RecommendationsResponse::success(card.recommendations())),
        ),
        Err(e) => (
            error_status(&e),
            Json(RecommendationsResponse::error(e.to_string())),
        ),
    }
}

/// Chart series over the KPIs kept by the optional filter.
pub async fn chart_handler(
    State(state): State<AppState>,
    Path((pob, kind)): Path<(String, String)>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ChartResponse::error(rejection.body_text())),
            );
        }
    };
    let selection = kind
        .parse::<ChartKind>()
        .and_then(|kind| Ok((kind, query.to_filter()?)));
    let (kind, filter) = match selection {
        Ok(selection) => selection,
        Err(e) => return (error_status(&e), Json(ChartResponse::error(e.to_string()))),
    };

    let dashboard = state.dashboard.read().await;
    match dashboard.get(&pob) {
        Ok(card) => (
            StatusCode::OK,
            Json(ChartResponse::success(kind, card.chart(kind, &filter))),
        ),
        Err(e) => (error_status(&e), Json(ChartResponse::error(e.to_string()))),
    }
}

// =============================================================================
// EXPORT HANDLER
// =============================================================================

/// Export a filtered KPI list as base64 CSV, in id order.
pub async fn export_handler(
    State(state): State<AppState>,
    Path(pob): Path<String>,
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ExportResponse::error(rejection.body_text())),
            );
        }
    };
    let filter = match request.to_filter() {
        Ok(filter) => filter,
        Err(e) => return (error_status(&e), Json(ExportResponse::error(e.to_string()))),
    };

    let dashboard = state.dashboard.read().await;
    let card = match dashboard.get(&pob) {
        Ok(card) => card,
        Err(e) => return (error_status(&e), Json(ExportResponse::error(e.to_string()))),
    };

    let rows = card.view(&filter, &KpiSort::default());
    let count = rows.len();
    match export_csv(rows) {
        Ok(data) => (StatusCode::OK, Json(ExportResponse::success(data, count))),
        Err(e) => {
            tracing::error!(pob = %pob, "Export failed: {}", e);
            (error_status(&e), Json(ExportResponse::error(e.to_string())))
        }
    }
}

// =============================================================================
// CLASSIFY HANDLER
// =============================================================================

/// Classify an achievement against ad-hoc boundaries.
pub async fn classify_handler(
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ClassifyResponse::error(rejection.body_text())),
            );
        }
    };
    match request.classify() {
        Ok(tier) => (StatusCode::OK, Json(ClassifyResponse::success(tier))),
        Err(e) => (error_status(&e), Json(ClassifyResponse::error(e.to_string()))),
    }
}
