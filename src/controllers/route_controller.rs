//! Controller de rutas

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::common::{BulkSaveResponse, StatusResponse};
use crate::dto::route_dto::{CreateRouteRequest, RouteRecord};
use crate::models::{is_placeholder_id, Route, RouteWithLocations};
use crate::repositories::route_repository::RouteRepository;
use crate::services::demo_data;
use crate::utils::errors::{AppError, AppResult};

pub struct RouteController {
    pool: Option<PgPool>,
}

impl RouteController {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    /// GET - todas las rutas con sus ubicaciones anidadas
    pub async fn list(&self) -> AppResult<Vec<RouteWithLocations>> {
        match &self.pool {
            Some(pool) => {
                RouteRepository::new(pool.clone())
                    .find_all_with_locations()
                    .await
            }
            None => Ok(demo_data::demo_routes_with_locations()),
        }
    }

    /// PUT - guardado masivo de rutas, misma partición que las ubicaciones
    pub async fn bulk_save(&self, records: Vec<RouteRecord>) -> AppResult<BulkSaveResponse> {
        let total = records.len();
        let (new_records, existing): (Vec<RouteRecord>, Vec<RouteRecord>) =
            records.into_iter().partition(|r| is_placeholder_id(r.id));

        log::info!(
            "💾 Saving {} routes ({} new, {} existing)",
            total,
            new_records.len(),
            existing.len()
        );

        let mut created = 0;
        let mut updated = 0;

        match &self.pool {
            Some(pool) => {
                let repository = RouteRepository::new(pool.clone());

                for record in &new_records {
                    repository.create(&record.as_new_route()).await?;
                    created += 1;
                }

                for record in &existing {
                    if repository.update(record).await? > 0 {
                        updated += 1;
                    } else {
                        log::warn!("⚠️ Route {} not found, skipping update", record.id);
                    }
                }
            }
            None => {
                created = new_records.len();
                updated = existing.len();
            }
        }

        Ok(BulkSaveResponse {
            success: true,
            message: "Routes saved successfully".to_string(),
            created,
            updated,
            total,
        })
    }

    /// POST - crear una ruta
    pub async fn create(&self, request: CreateRouteRequest) -> AppResult<Route> {
        match &self.pool {
            Some(pool) => {
                RouteRepository::new(pool.clone())
                    .create(&request.into_new_route())
                    .await
            }
            None => {
                let data = request.into_new_route();
                Ok(Route {
                    id: Utc::now().timestamp_millis(),
                    route: data.route,
                    shift: data.shift,
                    warehouse: data.warehouse,
                    description: data.description,
                })
            }
        }
    }

    /// DELETE - borrar por id. Las ubicaciones de la ruta quedan sin
    /// asignar, no se borran.
    pub async fn delete(&self, id: i64) -> AppResult<StatusResponse> {
        if let Some(pool) = &self.pool {
            let deleted = RouteRepository::new(pool.clone()).delete(id).await?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "Route with id {} not found",
                    id
                )));
            }
            log::info!("🗑️ Route {} deleted, its locations are now unassigned", id);
        }

        Ok(StatusResponse {
            success: true,
            message: "Route deleted successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_demo_bulk_save_counts_both_paths() {
        let controller = RouteController::new(None);
        let records: Vec<RouteRecord> = vec![
            serde_json::from_value(json!({ "id": 1, "route": "KL 7" })).unwrap(),
            serde_json::from_value(json!({ "id": 1_755_000_000_000_i64, "route": "KL 10" }))
                .unwrap(),
        ];

        let response = controller.bulk_save(records).await.unwrap();
        assert_eq!(response.message, "Routes saved successfully");
        assert_eq!(response.created, 1);
        assert_eq!(response.updated, 1);
        assert_eq!(response.total, 2);
    }

    #[tokio::test]
    async fn test_demo_list_groups_locations() {
        let controller = RouteController::new(None);
        let routes = controller.list().await.unwrap();

        assert_eq!(routes.len(), 3);
        assert!(routes.iter().all(|r| !r.locations.is_empty()));
    }
}
