//! Repositorio de ubicaciones

use sqlx::PgPool;

use crate::dto::location_dto::LocationRecord;
use crate::models::{Location, NewLocation};
use crate::utils::errors::AppError;

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listar ubicaciones ordenadas por número de parada, opcionalmente
    /// filtradas por ruta
    pub async fn find_all(&self, route_id: Option<i64>) -> Result<Vec<Location>, AppError> {
        let locations = match route_id {
            Some(route_id) => {
                sqlx::query_as::<_, Location>(
                    "SELECT * FROM locations WHERE route_id = $1 ORDER BY no ASC, id ASC",
                )
                .bind(route_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY no ASC, id ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(locations)
    }

    /// Insertar una ubicación y devolver la fila completa
    pub async fn create(&self, data: &NewLocation) -> Result<Location, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations
                (no, code, location, delivery, power_mode, images, route_id,
                 latitude, longitude, address, description, website,
                 qr_code_image_url, qr_code_destination_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(data.no)
        .bind(&data.code)
        .bind(&data.location)
        .bind(&data.delivery)
        .bind(&data.power_mode)
        .bind(&data.images)
        .bind(data.route_id)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.address)
        .bind(&data.description)
        .bind(&data.website)
        .bind(&data.qr_code_image_url)
        .bind(&data.qr_code_destination_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    /// Actualizar una fila existente por primary key. Devuelve cuántas
    /// filas se tocaron: 0 significa que el id ya no existe. La
    /// asignación de ruta no se cambia desde el guardado masivo.
    pub async fn update(&self, record: &LocationRecord) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE locations
            SET no = $2, code = $3, location = $4, delivery = $5,
                power_mode = $6, images = $7, latitude = $8, longitude = $9,
                address = $10, description = $11, website = $12,
                qr_code_image_url = $13, qr_code_destination_url = $14
            WHERE id = $1
            "#,
        )
        .bind(record.id)
        .bind(record.no)
        .bind(&record.code)
        .bind(&record.location)
        .bind(&record.delivery)
        .bind(&record.power_mode)
        .bind(&record.images)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.address)
        .bind(&record.description)
        .bind(&record.website)
        .bind(&record.qr_code_image_url)
        .bind(&record.qr_code_destination_url)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Borrar por id. Devuelve cuántas filas se borraron.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
