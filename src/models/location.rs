//! Modelo de Location

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Punto de entrega - mapea a la tabla `locations`.
///
/// `route_id` en NULL significa ubicación independiente, sin ruta
/// asignada. El wire format es camelCase, como espera el frontend.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub no: i32,
    pub code: String,
    pub location: String,
    pub delivery: String,
    pub power_mode: String,
    pub images: Vec<String>,
    pub route_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub qr_code_image_url: Option<String>,
    pub qr_code_destination_url: Option<String>,
}

/// Valores ya resueltos (defaults aplicados) para insertar una ubicación
#[derive(Debug, Clone, Default)]
pub struct NewLocation {
    pub no: i32,
    pub code: String,
    pub location: String,
    pub delivery: String,
    pub power_mode: String,
    pub images: Vec<String>,
    pub route_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub qr_code_image_url: Option<String>,
    pub qr_code_destination_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_serializes_camel_case() {
        let location = Location {
            id: 3,
            no: 1,
            code: "34".to_string(),
            location: "Wisma Cimb".to_string(),
            delivery: "Daily".to_string(),
            power_mode: "Daily".to_string(),
            images: vec!["https://example.com/a.png".to_string()],
            route_id: Some(1),
            latitude: None,
            longitude: None,
            address: None,
            description: None,
            website: None,
            qr_code_image_url: None,
            qr_code_destination_url: None,
        };

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["powerMode"], "Daily");
        assert_eq!(json["routeId"], 1);
        assert!(json.get("power_mode").is_none());
    }
}
