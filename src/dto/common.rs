//! DTOs compartidos entre endpoints

use serde::{Deserialize, Serialize};

/// Respuesta de operaciones sin payload (deletes)
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

/// Respuesta del guardado masivo con el desglose de la partición
#[derive(Debug, Serialize)]
pub struct BulkSaveResponse {
    pub success: bool,
    pub message: String,
    pub created: usize,
    pub updated: usize,
    pub total: usize,
}

/// Body de los DELETE: `{ "id": N }`
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: Option<i64>,
}
