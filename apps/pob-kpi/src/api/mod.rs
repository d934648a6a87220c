//! # POB KPI HTTP API Module
//!
//! This module implements the HTTP JSON API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /pobs` - List POBs
//! - `GET /pobs/{pob}/kpis` - Filtered, sorted KPI list
//! - `GET /pobs/{pob}/kpis/{id}` - One KPI
//! - `PUT /pobs/{pob}/kpis/{id}/achievement` - Edit an achievement
//! - `GET /pobs/{pob}/summary` - Tier counts and percentages
//! - `GET /pobs/{pob}/recommendations` - Remediation narratives
//! - `GET /pobs/{pob}/charts/{kind}?dimension=&tier=` - Chart series (`pie`, `radar`, `workload`)
//! - `POST /pobs/{pob}/export` - CSV export (base64)
//! - `POST /classify` - Ad-hoc classification
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `POB_KPI_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `POB_KPI_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `POB_KPI_API_KEY`: If set, requires Bearer token authentication

mod auth;
mod handlers;
mod middleware;
mod types;

pub use auth::get_api_key_from_env;
pub use middleware::create_rate_limiter;
pub use types::{
    AchievementInput, BoundariesJson, ChartQuery, ChartResponse, ClassifyRequest,
    ClassifyResponse, ExportRequest, ExportResponse, HealthResponse, KpiJson, KpiListResponse,
    KpiQuery, KpiResponse, PobInfo, PobListResponse, RecommendationsResponse, SummaryResponse,
    UpdateAchievementRequest,
};

use crate::config::{ENV_API_KEY, ServerConfig};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post, put},
};
use pob_kpi_core::{Dashboard, PobError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state containing the dashboard.
#[derive(Clone)]
pub struct AppState {
    /// Every POB scorecard. Edits take the write lock.
    pub dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    /// Create new app state around a dashboard.
    #[must_use]
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
        }
    }

    /// App state holding the bundled POBs.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Dashboard::seeded())
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from the configured origin list.
///
/// - `"*"`: allows all origins (development only)
/// - `None`: localhost only
/// - otherwise: comma-separated list of allowed origins
fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                restricted_cors(allowed_origins)
            }
        }
        None => {
            tracing::info!("CORS: No origins configured, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    restricted_cors(origins)
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting - 429 when exceeded (if enabled)
/// 5. Authentication - validates API key (if configured)
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let rate_limiter = if config.rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", config.rate_limit);
        Some(create_rate_limiter(config.rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    let has_auth = get_api_key_from_env().is_some();
    if has_auth {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible. \
             Set {} to enable authentication.",
            ENV_API_KEY
        );
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/pobs", get(handlers::list_pobs_handler))
        .route("/pobs/{pob}/kpis", get(handlers::list_kpis_handler))
        .route("/pobs/{pob}/kpis/{id}", get(handlers::get_kpi_handler))
        .route(
            "/pobs/{pob}/kpis/{id}/achievement",
            put(handlers::update_achievement_handler),
        )
        .route("/pobs/{pob}/summary", get(handlers::summary_handler))
        .route(
            "/pobs/{pob}/recommendations",
            get(handlers::recommendations_handler),
        )
        .route("/pobs/{pob}/charts/{kind}", get(handlers::chart_handler))
        .route("/pobs/{pob}/export", post(handlers::export_handler))
        .route("/classify", post(handlers::classify_handler));

    if has_auth {
        router = router.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    }

    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(config.cors_origins.as_deref()))
                .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(config: &ServerConfig, dashboard: Dashboard) -> Result<(), PobError> {
    let addr = config.addr();
    let router = create_router(AppState::new(dashboard), config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PobError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("POB KPI HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PobError::Io(format!("Server error: {}", e)))
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
