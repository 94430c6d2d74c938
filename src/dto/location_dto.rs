//! DTOs del endpoint /api/locations

use serde::Deserialize;

use crate::models::NewLocation;

fn default_cadence() -> String {
    "Daily".to_string()
}

/// Fila del guardado masivo. El cliente manda su tabla completa; las
/// filas con id provisional todavía no existen en la base de datos.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: i64,
    #[serde(default)]
    pub no: i32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_cadence")]
    pub delivery: String,
    #[serde(default = "default_cadence")]
    pub power_mode: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub route_id: Option<i64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub qr_code_image_url: Option<String>,
    #[serde(default)]
    pub qr_code_destination_url: Option<String>,
}

impl LocationRecord {
    /// Valores de inserción para una fila nueva del guardado masivo
    pub fn as_new_location(&self) -> NewLocation {
        NewLocation {
            no: self.no,
            code: self.code.clone(),
            location: self.location.clone(),
            delivery: self.delivery.clone(),
            power_mode: self.power_mode.clone(),
            images: self.images.clone(),
            route_id: self.route_id,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address.clone(),
            description: self.description.clone(),
            website: self.website.clone(),
            qr_code_image_url: self.qr_code_image_url.clone(),
            qr_code_destination_url: self.qr_code_destination_url.clone(),
        }
    }
}

/// Body de PUT /api/locations
#[derive(Debug, Deserialize)]
pub struct BulkSaveLocationsRequest {
    pub locations: Vec<LocationRecord>,
}

/// Body de POST /api/locations. Todos los campos son opcionales; el
/// controller sustituye los defaults del dominio.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub no: Option<i32>,
    pub code: Option<String>,
    pub location: Option<String>,
    pub delivery: Option<String>,
    pub power_mode: Option<String>,
    pub images: Option<Vec<String>>,
    pub route_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub qr_code_image_url: Option<String>,
    pub qr_code_destination_url: Option<String>,
}

impl CreateLocationRequest {
    /// Sustituir los campos ausentes por los defaults del dominio
    pub fn into_new_location(self) -> NewLocation {
        NewLocation {
            no: self.no.unwrap_or(0),
            code: self.code.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            delivery: self.delivery.unwrap_or_else(default_cadence),
            power_mode: self.power_mode.unwrap_or_else(default_cadence),
            images: self.images.unwrap_or_default(),
            route_id: self.route_id,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            description: self.description,
            website: self.website,
            qr_code_image_url: self.qr_code_image_url,
            qr_code_destination_url: self.qr_code_destination_url,
        }
    }
}

/// Query params de GET /api/locations
#[derive(Debug, Deserialize)]
pub struct LocationListParams {
    #[serde(rename = "routeId")]
    pub route_id: Option<i64>,
}
