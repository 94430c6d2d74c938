//! Rutas del endpoint /api/locations

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::location_controller::LocationController;
use crate::dto::common::{BulkSaveResponse, DeleteRequest, StatusResponse};
use crate::dto::location_dto::{
    BulkSaveLocationsRequest, CreateLocationRequest, LocationListParams,
};
use crate::models::Location;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_location_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_locations)
            .put(bulk_save_locations)
            .post(create_location)
            .delete(delete_location)
            .fallback(method_not_allowed),
    )
}

async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<LocationListParams>,
) -> Result<Json<Vec<Location>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let locations = controller.list(params.route_id).await?;
    Ok(Json(locations))
}

/// El guardado masivo exige `{ "locations": [...] }`; cualquier otra
/// forma responde 400 con el mensaje que el cliente muestra tal cual.
async fn bulk_save_locations(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<BulkSaveResponse>, AppError> {
    let request: BulkSaveLocationsRequest = serde_json::from_value(body)
        .map_err(|_| AppError::BadRequest("Invalid data format".to_string()))?;

    let controller = LocationController::new(state.pool.clone());
    let response = controller.bulk_save(request.locations).await?;
    Ok(Json(response))
}

async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<Location>), AppError> {
    let controller = LocationController::new(state.pool.clone());
    let location = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

async fn delete_location(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let id = match request.id {
        Some(id) => id,
        None => return Err(AppError::BadRequest("Location ID is required".to_string())),
    };

    let controller = LocationController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
