//! DTOs del endpoint /api/upload

use serde::Serialize;

/// Respuesta de POST /api/upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub data: UploadedImageData,
}

/// URLs públicas de la imagen ya alojada en el host externo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImageData {
    pub url: String,
    pub display_url: String,
    pub delete_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    pub size: u64,
}
