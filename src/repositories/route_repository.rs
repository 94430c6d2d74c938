//! Repositorio de rutas

use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::route_dto::RouteRecord;
use crate::models::{Location, NewRoute, Route, RouteWithLocations};
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listar las rutas por id con sus ubicaciones anidadas. Dos queries
    /// y un group-by en memoria en vez de un JOIN: la forma anidada de la
    /// respuesta se arma igual y el dataset es pequeño.
    pub async fn find_all_with_locations(&self) -> Result<Vec<RouteWithLocations>, AppError> {
        let routes = sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        let locations = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE route_id IS NOT NULL ORDER BY no ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_route: HashMap<i64, Vec<Location>> = HashMap::new();
        for location in locations {
            if let Some(route_id) = location.route_id {
                by_route.entry(route_id).or_default().push(location);
            }
        }

        Ok(routes
            .into_iter()
            .map(|route| {
                let locations = by_route.remove(&route.id).unwrap_or_default();
                RouteWithLocations { route, locations }
            })
            .collect())
    }

    /// Insertar una ruta y devolver la fila completa
    pub async fn create(&self, data: &NewRoute) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (route, shift, warehouse, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.route)
        .bind(&data.shift)
        .bind(&data.warehouse)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    /// Actualizar una ruta existente. Devuelve cuántas filas se tocaron.
    pub async fn update(&self, record: &RouteRecord) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE routes SET route = $2, shift = $3, warehouse = $4, description = $5 \
             WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.route)
        .bind(&record.shift)
        .bind(&record.warehouse)
        .bind(&record.description)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Borrar por id. El FK deja `route_id` en NULL en las ubicaciones
    /// de la ruta, nunca borra en cascada.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
