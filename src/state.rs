//! Estado compartido de la aplicación
//!
//! Viaja clonado por el router de Axum. El pool en `None` activa el
//! modo demo; el image host en `None` deja /api/upload sin configurar.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::image_host_service::ImageHost;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub pool: Option<PgPool>,
    pub image_host: Option<Arc<dyn ImageHost>>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        pool: Option<PgPool>,
        image_host: Option<Arc<dyn ImageHost>>,
    ) -> Self {
        Self {
            config,
            pool,
            image_host,
        }
    }

    /// Modo de almacenamiento activo, para logs y el health check
    pub fn storage_mode(&self) -> &'static str {
        if self.pool.is_some() {
            "database"
        } else {
            "demo"
        }
    }
}
