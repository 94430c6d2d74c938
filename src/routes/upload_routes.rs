//! Ruta del endpoint /api/upload

use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::controllers::upload_controller::{UploadController, UPLOAD_BODY_LIMIT_BYTES};
use crate::dto::upload_dto::UploadResponse;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Subidas simultáneas máximas; cada una bufferiza hasta 10 MB en disco
const MAX_CONCURRENT_UPLOADS: usize = 4;

/// Presupuesto total de la request (parse del form + host externo)
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(10);

pub fn create_upload_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_image).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT_BYTES))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_UPLOADS))
        .layer(TimeoutLayer::new(UPLOAD_TIMEOUT))
}

async fn upload_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let controller = UploadController::new(state.image_host.clone());
    let response = controller.upload(multipart).await?;
    Ok(Json(response))
}
