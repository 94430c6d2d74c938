//! Seed de la base de datos con el dataset de referencia.
//!
//! Uso: `DATABASE_URL=postgres://... cargo run --bin seed`
//!
//! Borra las tablas y las repuebla: tres rutas, las diez paradas de la
//! primera y la cocina central como fila independiente sin ruta.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::info;

use route_manager::database::connection::{create_pool, run_migrations};
use route_manager::models::{NewLocation, NewRoute};
use route_manager::repositories::location_repository::LocationRepository;
use route_manager::repositories::route_repository::RouteRepository;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set to seed the database")?;

    let pool = create_pool(&database_url).await?;
    run_migrations(&pool).await?;

    info!("🧹 Clearing existing data...");
    // primero las ubicaciones por el FK hacia routes
    sqlx::query("DELETE FROM locations").execute(&pool).await?;
    sqlx::query("DELETE FROM routes").execute(&pool).await?;

    let routes = RouteRepository::new(pool.clone());
    let locations = LocationRepository::new(pool.clone());

    let route1 = routes.create(&new_route("KL 7", "PM", "3AVK04")).await?;
    let route2 = routes.create(&new_route("KL 8", "AM", "3AVK05")).await?;
    let route3 = routes.create(&new_route("SG 1", "PM", "2BVK01")).await?;
    info!(
        "🚚 Created routes: {} / {} / {}",
        route1.route, route2.route, route3.route
    );

    // Las paradas de la primera ruta, con sus fotos de muestra
    let stops: [(i32, &str, &str, &str, &str, &[&str]); 10] = [
        (1, "34", "Wisma Cimb", "Daily", "Daily", &[
            "https://picsum.photos/200/150?random=1",
            "https://picsum.photos/200/150?random=2",
        ]),
        (2, "42", "Plaza Rakyat", "Weekly", "Alt 1", &[
            "https://picsum.photos/200/150?random=3",
        ]),
        (3, "51", "KLCC Tower", "Daily", "Alt 2", &[
            "https://picsum.photos/200/150?random=4",
            "https://picsum.photos/200/150?random=5",
        ]),
        (4, "67", "Menara TM", "Monthly", "Weekday", &[
            "https://picsum.photos/200/150?random=6",
        ]),
        (5, "89", "Pavilion KL", "Daily", "Daily", &[
            "https://picsum.photos/200/150?random=7",
            "https://picsum.photos/200/150?random=8",
        ]),
        (6, "23", "Suria KLCC", "Weekly", "Alt 1", &[
            "https://picsum.photos/200/150?random=9",
        ]),
        (7, "76", "Mid Valley", "Daily", "Alt 2", &[
            "https://picsum.photos/200/150?random=10",
        ]),
        (8, "94", "Bangsar Village", "Weekly", "Weekday", &[
            "https://picsum.photos/200/150?random=11",
            "https://picsum.photos/200/150?random=12",
        ]),
        (9, "12", "One Utama", "Daily", "Daily", &[
            "https://picsum.photos/200/150?random=13",
        ]),
        (10, "56", "Sunway Pyramid", "Weekly", "Alt 1", &[
            "https://picsum.photos/200/150?random=14",
            "https://picsum.photos/200/150?random=15",
        ]),
    ];

    for (no, code, name, delivery, power_mode, images) in stops {
        locations
            .create(&NewLocation {
                no,
                code: code.to_string(),
                location: name.to_string(),
                delivery: delivery.to_string(),
                power_mode: power_mode.to_string(),
                images: images.iter().map(|s| s.to_string()).collect(),
                route_id: Some(route1.id),
                ..NewLocation::default()
            })
            .await?;
    }
    info!("📍 Created {} locations on route {}", stops.len(), route1.route);

    // La cocina central: fila independiente, sin ruta asignada
    locations
        .create(&NewLocation {
            no: 0,
            code: "QLK".to_string(),
            location: "QL Kitchen".to_string(),
            delivery: "Available".to_string(),
            power_mode: "Daily".to_string(),
            route_id: None,
            latitude: Some(3.0738),
            longitude: Some(101.5183),
            address: Some("QL Kitchen, Shah Alam".to_string()),
            description: Some("Main kitchen location for QL Resources".to_string()),
            ..NewLocation::default()
        })
        .await?;

    info!("✅ Database seeded successfully!");
    info!("✅ Independent row (QL Kitchen) created with code: QLK");

    Ok(())
}

fn new_route(route: &str, shift: &str, warehouse: &str) -> NewRoute {
    NewRoute {
        route: route.to_string(),
        shift: shift.to_string(),
        warehouse: warehouse.to_string(),
        description: None,
    }
}
