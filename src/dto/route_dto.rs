//! DTOs del endpoint /api/routes

use serde::Deserialize;

use crate::models::NewRoute;

/// Fila del guardado masivo de rutas
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    pub id: i64,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub warehouse: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RouteRecord {
    pub fn as_new_route(&self) -> NewRoute {
        NewRoute {
            route: self.route.clone(),
            shift: self.shift.clone(),
            warehouse: self.warehouse.clone(),
            description: self.description.clone(),
        }
    }
}

/// Body de PUT /api/routes
#[derive(Debug, Deserialize)]
pub struct BulkSaveRoutesRequest {
    pub routes: Vec<RouteRecord>,
}

/// Body de POST /api/routes, con defaults del controller
#[derive(Debug, Default, Deserialize)]
pub struct CreateRouteRequest {
    pub route: Option<String>,
    pub shift: Option<String>,
    pub warehouse: Option<String>,
    pub description: Option<String>,
}

impl CreateRouteRequest {
    pub fn into_new_route(self) -> NewRoute {
        NewRoute {
            route: self.route.unwrap_or_default(),
            shift: self.shift.unwrap_or_default(),
            warehouse: self.warehouse.unwrap_or_default(),
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults_to_empty_strings() {
        let request: CreateRouteRequest = serde_json::from_str("{}").unwrap();
        let data = request.into_new_route();

        assert_eq!(data.route, "");
        assert_eq!(data.shift, "");
        assert_eq!(data.warehouse, "");
        assert!(data.description.is_none());
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: RouteRecord = serde_json::from_value(json!({ "id": 2 })).unwrap();
        assert_eq!(record.id, 2);
        assert_eq!(record.route, "");
    }
}
