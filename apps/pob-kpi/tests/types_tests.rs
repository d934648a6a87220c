//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use pob_kpi::api::{
    AchievementInput, ChartQuery, ClassifyRequest, ClassifyResponse, ExportRequest, ExportResponse,
    HealthResponse, KpiJson, KpiListResponse, KpiQuery, KpiResponse, UpdateAchievementRequest,
};
use pob_kpi_core::{Dashboard, Dimension, KpiId, PobError, SortDirection, SortField, Tier};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status":"healthy","version":"1.0.0"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "1.0.0");
}

// =============================================================================
// KPI RECORD TESTS
// =============================================================================

#[test]
fn test_kpi_json_from_seed() {
    let dashboard = Dashboard::seeded();
    let kpi = dashboard
        .get("penjaminan-mutu-akademik")
        .unwrap()
        .get(KpiId(1))
        .unwrap();

    let record = KpiJson::from(kpi);
    assert_eq!(record.id, 1);
    assert_eq!(record.dimension, "Time");
    assert_eq!(record.achievement, "6");
    assert!(!record.higher_is_better);
    assert_eq!(record.boundaries.poor, "> 14 hari");
    assert_eq!(record.status, Tier::Good);

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"status\":\"good\""));
    assert!(json.contains("\"status_label\":\"Good\""));
}

#[test]
fn test_needs_improvement_wire_name() {
    let json = serde_json::to_string(&Tier::NeedsImprovement).unwrap();
    assert_eq!(json, "\"needs-improvement\"");
}

#[test]
fn test_kpi_response_omits_summary_when_absent() {
    let response = KpiResponse::error("KPI not found: 99");
    let json = serde_json::to_string(&response).unwrap();

    assert!(json.contains("\"success\":false"));
    assert!(!json.contains("summary"));
}

#[test]
fn test_kpi_list_error() {
    let response = KpiListResponse::error("Unknown tier: x");
    assert!(!response.success);
    assert!(response.kpis.is_empty());
    assert!(response.pob.is_none());
}

// =============================================================================
// QUERY TESTS
// =============================================================================

#[test]
fn test_kpi_query_defaults() {
    let query: KpiQuery = serde_json::from_str("{}").unwrap();
    let (filter, sort) = query.to_view().unwrap();

    assert!(filter.dimension.is_none());
    assert!(filter.tier.is_none());
    assert_eq!(sort.field, SortField::Id);
    assert_eq!(sort.direction, SortDirection::Asc);
}

#[test]
fn test_kpi_query_rejects_unknown_sort() {
    let query = KpiQuery {
        sort: Some("colour".to_string()),
        ..KpiQuery::default()
    };
    assert!(matches!(query.to_view(), Err(PobError::InvalidQuery(_))));
}

#[test]
fn test_export_request_filter() {
    let request: ExportRequest = serde_json::from_str(r#"{"dimension":"Waktu"}"#).unwrap();
    let filter = request.to_filter().unwrap();
    assert_eq!(filter.dimension.map(|d| d.label()), Some("Time"));
    assert!(filter.tier.is_none());
}

// =============================================================================
// ACHIEVEMENT INPUT TESTS
// =============================================================================

#[test]
fn test_achievement_input_text() {
    let request: UpdateAchievementRequest =
        serde_json::from_str(r#"{"achievement":"4.5 hari"}"#).unwrap();
    assert_eq!(
        request.achievement,
        AchievementInput::Text("4.5 hari".to_string())
    );
    assert_eq!(request.achievement.to_text().unwrap(), "4.5 hari");
}

#[test]
fn test_achievement_input_number() {
    let request: UpdateAchievementRequest =
        serde_json::from_str(r#"{"achievement":85}"#).unwrap();
    assert_eq!(request.achievement, AchievementInput::Number(85.0));
    assert_eq!(request.achievement.to_text().unwrap(), "85");
}

#[test]
fn test_achievement_input_other_shapes_are_not_numeric() {
    for body in [
        r#"{"achievement":null}"#,
        r#"{"achievement":true}"#,
        r#"{"achievement":[1,2]}"#,
        r#"{"achievement":{"value":5}}"#,
    ] {
        let request: UpdateAchievementRequest = serde_json::from_str(body).unwrap();
        assert!(matches!(request.achievement, AchievementInput::Other(_)));
        assert!(matches!(
            request.achievement.to_text(),
            Err(PobError::InvalidAchievement(_))
        ));
    }
}

#[test]
fn test_achievement_input_is_required() {
    let result: Result<UpdateAchievementRequest, _> = serde_json::from_str("{}");
    assert!(result.is_err());
}

#[test]
fn test_classify_request_null_achievement() {
    let json = r#"{"boundaries":["< 60%","60-74%","75-84%","≥ 85%"],"achievement":null}"#;
    let request: ClassifyRequest = serde_json::from_str(json).unwrap();
    assert!(matches!(
        request.classify(),
        Err(PobError::InvalidAchievement(_))
    ));
}

#[test]
fn test_chart_query_filter() {
    let query: ChartQuery = serde_json::from_str(r#"{"dimension":"Waktu"}"#).unwrap();
    let filter = query.to_filter().unwrap();
    assert_eq!(filter.dimension, Some(Dimension::Time));
    assert!(filter.tier.is_none());

    let query = ChartQuery {
        dimension: None,
        tier: Some("superb".to_string()),
    };
    assert!(matches!(query.to_filter(), Err(PobError::InvalidQuery(_))));
}

// =============================================================================
// CLASSIFY TESTS
// =============================================================================

#[test]
fn test_classify_request_defaults_to_higher_is_better() {
    let json = r#"{"boundaries":["< 60%","60-74%","75-84%","≥ 85%"],"achievement":"78"}"#;
    let request: ClassifyRequest = serde_json::from_str(json).unwrap();

    assert!(request.higher_is_better);
    assert_eq!(request.classify().unwrap(), Tier::Good);
}

#[test]
fn test_classify_request_requires_four_boundaries() {
    let json = r#"{"boundaries":["< 60%","60-74%","75-84%"],"achievement":"78"}"#;
    let result: Result<ClassifyRequest, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_classify_request_malformed_boundaries_fall_to_poor() {
    let json = r#"{"boundaries":["n/a","n/a","n/a","n/a"],"achievement":50}"#;
    let request: ClassifyRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.classify().unwrap(), Tier::Poor);
}

#[test]
fn test_classify_response_serialization() {
    let response = ClassifyResponse::success(Tier::Excellent);
    let json = serde_json::to_string(&response).unwrap();

    assert!(json.contains("\"tier\":\"excellent\""));
    assert!(json.contains("\"label\":\"Excellent\""));
}

// =============================================================================
// EXPORT RESPONSE TESTS
// =============================================================================

#[test]
fn test_export_response_success() {
    let response = ExportResponse::success(b"ID\n1\n".to_vec(), 1);

    assert!(response.success);
    assert_eq!(response.data.as_deref(), Some("SUQKMQo="));
    assert_eq!(response.rows, Some(1));
    assert!(response.error.is_none());
}

#[test]
fn test_export_response_error() {
    let response = ExportResponse::error("Export failed");

    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error, Some("Export failed".to_string()));
}
