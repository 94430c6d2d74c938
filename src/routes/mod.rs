//! Routers de la API
//!
//! Monta los endpoints bajo /api, el health check y las respuestas JSON
//! de 404/405 para que ningún error salga en texto plano.

pub mod location_routes;
pub mod route_routes;
pub mod upload_routes;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir la aplicación completa con middleware y estado
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/locations", location_routes::create_location_router())
        .nest("/api/routes", route_routes::create_route_router())
        .nest("/api/upload", upload_routes::create_upload_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check con el modo de almacenamiento activo
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "route-manager",
        "status": "ok",
        "storage": state.storage_mode(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 404 JSON para paths desconocidos
async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// 405 JSON para métodos no soportados en endpoints conocidos
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
