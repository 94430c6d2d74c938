//! Controller de ubicaciones
//!
//! Sin pool configurado (modo demo) responde desde el dataset fijo:
//! las lecturas devuelven siempre lo mismo y las escrituras se aceptan
//! sin persistir.

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::common::{BulkSaveResponse, StatusResponse};
use crate::dto::location_dto::{CreateLocationRequest, LocationRecord};
use crate::models::{is_placeholder_id, Location};
use crate::repositories::location_repository::LocationRepository;
use crate::services::demo_data;
use crate::utils::errors::{AppError, AppResult};

pub struct LocationController {
    pool: Option<PgPool>,
}

impl LocationController {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    /// GET - listado completo, opcionalmente filtrado por ruta
    pub async fn list(&self, route_id: Option<i64>) -> AppResult<Vec<Location>> {
        match &self.pool {
            Some(pool) => {
                LocationRepository::new(pool.clone())
                    .find_all(route_id)
                    .await
            }
            None => Ok(demo_data::demo_locations(route_id)),
        }
    }

    /// PUT - guardado masivo particionado por id provisional.
    ///
    /// Primero las inserciones y después los updates, cada statement
    /// secuencial y sin transacción: un fallo a mitad deja lo anterior
    /// confirmado y aborta el resto. Un update sobre un id que ya no
    /// existe se salta con warning, no es error.
    pub async fn bulk_save(&self, records: Vec<LocationRecord>) -> AppResult<BulkSaveResponse> {
        let total = records.len();
        let (new_records, existing): (Vec<LocationRecord>, Vec<LocationRecord>) =
            records.into_iter().partition(|r| is_placeholder_id(r.id));

        log::info!(
            "💾 Saving {} locations ({} new, {} existing)",
            total,
            new_records.len(),
            existing.len()
        );

        let mut created = 0;
        let mut updated = 0;

        match &self.pool {
            Some(pool) => {
                let repository = LocationRepository::new(pool.clone());

                for record in &new_records {
                    repository.create(&record.as_new_location()).await?;
                    created += 1;
                }

                for record in &existing {
                    if repository.update(record).await? > 0 {
                        updated += 1;
                    } else {
                        log::warn!("⚠️ Location {} not found, skipping update", record.id);
                    }
                }
            }
            None => {
                // modo demo: se confirma la escritura sin persistirla
                created = new_records.len();
                updated = existing.len();
            }
        }

        Ok(BulkSaveResponse {
            success: true,
            message: "Locations saved successfully".to_string(),
            created,
            updated,
            total,
        })
    }

    /// POST - crear una ubicación con los defaults ya sustituidos
    pub async fn create(&self, request: CreateLocationRequest) -> AppResult<Location> {
        match &self.pool {
            Some(pool) => {
                LocationRepository::new(pool.clone())
                    .create(&request.into_new_location())
                    .await
            }
            None => {
                // eco con un id provisional, nada que persistir
                let data = request.into_new_location();
                Ok(Location {
                    id: Utc::now().timestamp_millis(),
                    no: data.no,
                    code: data.code,
                    location: data.location,
                    delivery: data.delivery,
                    power_mode: data.power_mode,
                    images: data.images,
                    route_id: data.route_id,
                    latitude: data.latitude,
                    longitude: data.longitude,
                    address: data.address,
                    description: data.description,
                    website: data.website,
                    qr_code_image_url: data.qr_code_image_url,
                    qr_code_destination_url: data.qr_code_destination_url,
                })
            }
        }
    }

    /// DELETE - borrar por id; un id desconocido es 404
    pub async fn delete(&self, id: i64) -> AppResult<StatusResponse> {
        if let Some(pool) = &self.pool {
            let deleted = LocationRepository::new(pool.clone()).delete(id).await?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "Location with id {} not found",
                    id
                )));
            }
            log::info!("🗑️ Location {} deleted", id);
        }

        Ok(StatusResponse {
            success: true,
            message: "Location deleted successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: i64) -> LocationRecord {
        serde_json::from_value(json!({ "id": id })).unwrap()
    }

    #[tokio::test]
    async fn test_demo_bulk_save_reports_partition_sizes() {
        let controller = LocationController::new(None);
        let records = vec![record(1), record(2), record(1_800_000_000_000)];

        let response = controller.bulk_save(records).await.unwrap();
        assert!(response.success);
        assert_eq!(response.created, 1);
        assert_eq!(response.updated, 2);
        assert_eq!(response.total, 3);
    }

    #[tokio::test]
    async fn test_demo_create_echoes_with_placeholder_id() {
        let controller = LocationController::new(None);
        let request: CreateLocationRequest =
            serde_json::from_value(json!({ "location": "Ephemeral" })).unwrap();

        let created = controller.create(request).await.unwrap();
        assert_eq!(created.location, "Ephemeral");
        assert_eq!(created.delivery, "Daily");
        assert!(is_placeholder_id(created.id));
    }

    #[tokio::test]
    async fn test_demo_delete_acknowledges() {
        let controller = LocationController::new(None);
        let response = controller.delete(5).await.unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Location deleted successfully");
    }
}
