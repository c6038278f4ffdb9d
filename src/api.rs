//! HTTP surface: assessment, recommendation, sample and field-reference routes.

use std::collections::HashMap;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::engine::{self, AssessmentReport};
use crate::features::{field_reference, FieldInfo, ValidationError};
use crate::metrics::Metrics;
use crate::recommendations::{recommendations_for_level, RecommendationEntry};
use crate::samples::SampleProfile;

/// Router with default config and no `/metrics` (tests, embedding).
pub fn router() -> Router {
    create_router(&AppConfig::default(), None)
}

pub fn create_router(cfg: &AppConfig, metrics: Option<&Metrics>) -> Router {
    let mut router = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/assess", post(assess))
        .route("/fields", get(fields))
        .route("/recommendations/{level}", get(recommendations))
        .route("/samples/{profile}", get(sample));

    if let Some(m) = metrics {
        router = router.merge(m.router());
    }
    if cfg.server.cors_permissive {
        router = router.layer(CorsLayer::very_permissive());
    }
    router
}

/// 422 with `{ "error": ..., "field": ... }`.
struct ApiError(ValidationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.0.to_string(),
            "field": self.0.field().key(),
        });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

async fn assess(Json(body): Json<Map<String, Value>>) -> Result<Json<AssessmentReport>, ApiError> {
    let raw = raw_fields(body);
    engine::report(&raw).map(Json).map_err(ApiError)
}

/// Form values arrive as strings or numbers; `null` counts as absent and any
/// other JSON type is kept as its JSON text (which then fails numeric parsing).
fn raw_fields(body: Map<String, Value>) -> HashMap<String, String> {
    body.into_iter()
        .filter_map(|(k, v)| match v {
            Value::Null => None,
            Value::String(s) => Some((k, s)),
            Value::Number(n) => Some((k, n.to_string())),
            other => Some((k, other.to_string())),
        })
        .collect()
}

async fn fields() -> Json<Vec<FieldInfo>> {
    Json(field_reference())
}

async fn recommendations(Path(level): Path<String>) -> Json<&'static [RecommendationEntry]> {
    Json(recommendations_for_level(&level))
}

async fn sample(Path(profile): Path<String>) -> Result<Json<HashMap<String, String>>, StatusCode> {
    let profile: SampleProfile = profile.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Json(profile.raw_fields()))
}
