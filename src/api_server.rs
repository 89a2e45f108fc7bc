// Axum API Server Module
//
// Purpose: JSON endpoints for the pot and bed calculators

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::calculators::{
    batch::total_pot_ml, estimate_bed, estimate_pot, estimate_pots_parallel, BedRequest, PotRequest,
};
use crate::config::CoefficientConfig;
use crate::error::CalcError;
use crate::utils::{frequency_label, round_liters};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CoefficientConfig>,
}

impl AppState {
    pub fn new(config: CoefficientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Load coefficients from `path` (or built-in defaults)
    pub fn from_path(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        tracing::info!("Loading coefficient configuration...");
        let config = CoefficientConfig::load_or_default(path)?;
        tracing::info!(
            "Loaded {} Kc entries, {} bed entries",
            config.kc_map.len(),
            config.bed_map.len()
        );
        Ok(Self::new(config))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/coefficients", get(get_coefficients))
        .route("/api/irrigation/pot/batch", post(estimate_pot_batch))
        .route("/api/irrigation/pot", post(estimate_pot_handler))
        .route("/api/irrigation/bed", post(estimate_bed_handler))
        .route("/api/frequency/:days", get(get_frequency_label))
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_coefficients(State(state): State<AppState>) -> Json<CoefficientConfig> {
    Json(state.config.as_ref().clone())
}

/// POST /api/irrigation/pot
async fn estimate_pot_handler(
    State(state): State<AppState>,
    body: Result<Json<PotRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = body?;
    let result = estimate_pot(&request, &state.config)?;

    Ok(Json(serde_json::json!({
        "et0_mm": result.et0_mm,
        "etc_mm": result.etc_mm,
        "volume_ml": result.volume.as_ml(),
        "volume_ml_display": result.volume.display_value(),
        "volume_fl_oz": result.volume.as_fl_oz(),
    })))
}

#[derive(serde::Deserialize)]
struct PotBatchRequest {
    pots: Vec<PotRequest>,
}

/// POST /api/irrigation/pot/batch
///
/// Per-pot errors are reported inline; the batch itself only fails on a
/// malformed body.
async fn estimate_pot_batch(
    State(state): State<AppState>,
    body: Result<Json<PotBatchRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(payload) = body?;
    let count = payload.pots.len();
    tracing::info!("Batch pot estimate for {} pots", count);

    let config = state.config.clone();
    let results = tokio::task::spawn_blocking(move || estimate_pots_parallel(&payload.pots, &config))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let total_ml = total_pot_ml(&results);
    let rows: Vec<serde_json::Value> = results
        .iter()
        .map(|r| match r {
            Ok(res) => serde_json::json!({
                "et0_mm": res.et0_mm,
                "etc_mm": res.etc_mm,
                "volume_ml": res.volume.as_ml(),
                "volume_ml_display": res.volume.display_value(),
            }),
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        })
        .collect();

    Ok(Json(serde_json::json!({
        "count": count,
        "total_ml": total_ml,
        "results": rows,
    })))
}

/// POST /api/irrigation/bed
async fn estimate_bed_handler(
    State(state): State<AppState>,
    body: Result<Json<BedRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = body?;
    let balance = estimate_bed(&request, &state.config)?;

    let mut body = serde_json::to_value(balance)
        .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;
    body["liters_display"] = serde_json::json!(round_liters(balance.liters));

    Ok(Json(body))
}

/// GET /api/frequency/:days
async fn get_frequency_label(Path(days): Path<u32>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "days": days,
        "label": frequency_label(days),
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unprocessable(String),
    Internal(String),
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::Validation { .. } => AppError::BadRequest(err.to_string()),
            CalcError::PolarGeometry { .. } => AppError::Unprocessable(err.to_string()),
            CalcError::Weather(_) => AppError::Internal(err.to_string()),
        }
    }
}

/// Malformed or mistyped bodies get the same `{error}` shape as everything else
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
