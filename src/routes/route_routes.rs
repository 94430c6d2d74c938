//! Rutas del endpoint /api/routes

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use crate::controllers::route_controller::RouteController;
use crate::dto::common::{BulkSaveResponse, DeleteRequest, StatusResponse};
use crate::dto::route_dto::{BulkSaveRoutesRequest, CreateRouteRequest};
use crate::models::{Route, RouteWithLocations};
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_routes)
            .put(bulk_save_routes)
            .post(create_route)
            .delete(delete_route)
            .fallback(method_not_allowed),
    )
}

async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteWithLocations>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let routes = controller.list().await?;
    Ok(Json(routes))
}

async fn bulk_save_routes(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<BulkSaveResponse>, AppError> {
    let request: BulkSaveRoutesRequest = serde_json::from_value(body)
        .map_err(|_| AppError::BadRequest("Invalid data format".to_string()))?;

    let controller = RouteController::new(state.pool.clone());
    let response = controller.bulk_save(request.routes).await?;
    Ok(Json(response))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<(StatusCode, Json<Route>), AppError> {
    let controller = RouteController::new(state.pool.clone());
    let route = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

async fn delete_route(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let id = match request.id {
        Some(id) => id,
        None => return Err(AppError::BadRequest("Route ID is required".to_string())),
    };

    let controller = RouteController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
