//! Dataset de demostración
//!
//! Cuando no hay `DATABASE_URL` configurada el servicio responde con
//! este dataset fijo. Las escrituras se aceptan con la respuesta normal
//! pero no se persisten: el siguiente GET devuelve lo mismo de siempre.

use lazy_static::lazy_static;

use crate::models::{Location, Route, RouteWithLocations};

lazy_static! {
    /// Rutas fijas del modo demo
    pub static ref DEMO_ROUTES: Vec<Route> = vec![
        demo_route(1, "KL 7", "PM", "3AVK04"),
        demo_route(2, "KL 8", "AM", "3AVK05"),
        demo_route(3, "SG 1", "PM", "2BVK01"),
    ];

    /// Ubicaciones fijas del modo demo. La última fila es la cocina
    /// central, la única con coordenadas.
    pub static ref DEMO_LOCATIONS: Vec<Location> = vec![
        demo_location(1, 1, "34", "Wisma Cimb", "Daily", "Daily", Some(1)),
        demo_location(2, 2, "42", "Plaza Rakyat", "Weekly", "Alt 1", Some(1)),
        demo_location(3, 3, "51", "KLCC Tower", "Daily", "Alt 2", Some(1)),
        demo_location(4, 1, "67", "Menara TM", "Monthly", "Weekday", Some(2)),
        demo_location(5, 2, "89", "Pavilion KL", "Daily", "Daily", Some(2)),
        demo_location(6, 3, "23", "Suria KLCC", "Weekly", "Alt 1", Some(2)),
        demo_location(7, 1, "76", "Mid Valley", "Daily", "Alt 2", Some(3)),
        demo_location(8, 2, "94", "Bangsar Village", "Weekly", "Weekday", Some(3)),
        demo_location(9, 3, "31", "Nu Sentral", "Daily", "Daily", Some(3)),
        demo_location(10, 4, "58", "One Utama", "Monthly", "Alt 1", Some(3)),
        ql_kitchen(),
    ];
}

fn demo_route(id: i64, route: &str, shift: &str, warehouse: &str) -> Route {
    Route {
        id,
        route: route.to_string(),
        shift: shift.to_string(),
        warehouse: warehouse.to_string(),
        description: None,
    }
}

fn demo_location(
    id: i64,
    no: i32,
    code: &str,
    name: &str,
    delivery: &str,
    power_mode: &str,
    route_id: Option<i64>,
) -> Location {
    Location {
        id,
        no,
        code: code.to_string(),
        location: name.to_string(),
        delivery: delivery.to_string(),
        power_mode: power_mode.to_string(),
        images: vec![],
        route_id,
        latitude: None,
        longitude: None,
        address: Some(String::new()),
        description: None,
        website: None,
        qr_code_image_url: Some(String::new()),
        qr_code_destination_url: Some(String::new()),
    }
}

fn ql_kitchen() -> Location {
    Location {
        id: 11,
        no: 4,
        code: "QL01".to_string(),
        location: "QL Kitchen".to_string(),
        delivery: "Daily".to_string(),
        power_mode: "Daily".to_string(),
        images: vec![],
        route_id: Some(1),
        latitude: Some(3.069_550_0),
        longitude: Some(101.546_917_9),
        address: Some("QL Kitchen".to_string()),
        description: None,
        website: None,
        qr_code_image_url: Some(String::new()),
        qr_code_destination_url: Some(String::new()),
    }
}

/// Ubicaciones del modo demo, opcionalmente filtradas por ruta
pub fn demo_locations(route_id: Option<i64>) -> Vec<Location> {
    match route_id {
        Some(route_id) => DEMO_LOCATIONS
            .iter()
            .filter(|l| l.route_id == Some(route_id))
            .cloned()
            .collect(),
        None => DEMO_LOCATIONS.clone(),
    }
}

/// Rutas del modo demo con sus ubicaciones anidadas
pub fn demo_routes_with_locations() -> Vec<RouteWithLocations> {
    DEMO_ROUTES
        .iter()
        .map(|route| RouteWithLocations {
            route: route.clone(),
            locations: DEMO_LOCATIONS
                .iter()
                .filter(|l| l.route_id == Some(route.id))
                .cloned()
                .collect(),
        })
        .collect()
}
