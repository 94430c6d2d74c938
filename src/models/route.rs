//! Modelo de Route

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::location::Location;

/// Ruta de reparto - mapea a la tabla `routes`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub route: String,
    pub shift: String,
    pub warehouse: String,
    pub description: Option<String>,
}

/// Ruta con sus ubicaciones anidadas, la forma que devuelve GET /api/routes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteWithLocations {
    #[serde(flatten)]
    pub route: Route,
    pub locations: Vec<Location>,
}

/// Valores ya resueltos (defaults aplicados) para insertar una ruta
#[derive(Debug, Clone, Default)]
pub struct NewRoute {
    pub route: String,
    pub shift: String,
    pub warehouse: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_with_locations_flattens_route_fields() {
        let nested = RouteWithLocations {
            route: Route {
                id: 1,
                route: "KL 7".to_string(),
                shift: "PM".to_string(),
                warehouse: "3AVK04".to_string(),
                description: None,
            },
            locations: vec![],
        };

        let json = serde_json::to_value(&nested).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["route"], "KL 7");
        assert_eq!(json["warehouse"], "3AVK04");
        assert!(json["locations"].as_array().unwrap().is_empty());
    }
}
