use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use route_manager::config::environment::EnvironmentConfig;
use route_manager::database::connection::{create_pool, run_migrations};
use route_manager::routes::create_app;
use route_manager::services::image_host_service::{ImageHost, ImgBbClient};
use route_manager::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (el puente con `log` viene en los defaults)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚚 Route Manager - Delivery Routes & Locations API");
    info!("==================================================");

    let config = EnvironmentConfig::from_env();

    // Pool de PostgreSQL; sin DATABASE_URL arrancamos en modo demo
    let pool = match &config.database_url {
        Some(url) => {
            let pool = match create_pool(url).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error connecting to the database: {}", e);
                    return Err(e);
                }
            };
            run_migrations(&pool).await?;
            info!("✅ Database connected, schema up to date");
            Some(pool)
        }
        None => {
            warn!("🎭 DATABASE_URL not set. Serving the demo dataset; writes will not persist");
            None
        }
    };

    // Cliente del host de imágenes para /api/upload
    let image_host: Option<Arc<dyn ImageHost>> = match &config.imgbb_api_key {
        Some(key) => Some(Arc::new(ImgBbClient::new(key.clone()))),
        None => {
            warn!("⚠️ IMGBB_API_KEY not set. /api/upload will answer 500 until it is configured");
            None
        }
    };

    let state = AppState::new(config.clone(), pool, image_host);
    let app = create_app(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Server starting at http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET    /health - Health check");
    info!("📍 Locations:");
    info!("   GET    /api/locations - List locations (optional ?routeId=)");
    info!("   PUT    /api/locations - Bulk save locations");
    info!("   POST   /api/locations - Create location");
    info!("   DELETE /api/locations - Delete location by id");
    info!("🚚 Routes:");
    info!("   GET    /api/routes - List routes with their locations");
    info!("   PUT    /api/routes - Bulk save routes");
    info!("   POST   /api/routes - Create route");
    info!("   DELETE /api/routes - Delete route by id");
    info!("🖼️ Upload:");
    info!("   POST   /api/upload - Upload an image, returns its public URL");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

/// Esperar Ctrl+C o SIGTERM para el apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
