//! Controller de subida de imágenes
//!
//! Pipeline del multipart: elegir el primer campo con archivo, validar
//! el MIME, volcarlo a un archivo temporal midiendo el techo de tamaño,
//! mandarlo en base64 al host de imágenes y borrar el temporal pase lo
//! que pase.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::dto::upload_dto::{UploadResponse, UploadedImageData};
use crate::services::image_host_service::ImageHost;
use crate::utils::errors::{AppError, AppResult};

/// Techo de tamaño por archivo: 10 MB
pub const MAX_UPLOAD_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Límite del body multipart completo (el archivo más el overhead del
/// form). Por encima del techo por archivo para que el exceso lo
/// rechace nuestra validación con su mensaje, no el framework.
pub const UPLOAD_BODY_LIMIT_BYTES: usize = 11 * 1024 * 1024;

/// Tipos MIME aceptados
const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Archivo ya volcado a disco, listo para mandar al host
struct StoredUpload {
    temp_path: PathBuf,
    size: u64,
}

pub struct UploadController {
    image_host: Option<Arc<dyn ImageHost>>,
}

impl UploadController {
    pub fn new(image_host: Option<Arc<dyn ImageHost>>) -> Self {
        Self { image_host }
    }

    /// POST - subir la primera imagen del form al host externo
    pub async fn upload(&self, mut multipart: Multipart) -> AppResult<UploadResponse> {
        let mut stored: Option<StoredUpload> = None;

        while let Some(mut field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
        {
            // los campos de texto del form se ignoran
            if field.file_name().is_none() {
                continue;
            }

            let file_name = field.file_name().unwrap_or("upload").to_string();
            let mime_type = field.content_type().unwrap_or_default().to_ascii_lowercase();

            log::info!("📤 Upload received: {} ({})", file_name, mime_type);

            if !ALLOWED_IMAGE_TYPES.contains(&mime_type.as_str()) {
                return Err(AppError::BadRequest(
                    "Invalid file type. Only JPEG, PNG, GIF, and WebP images are allowed"
                        .to_string(),
                ));
            }

            let temp_path = temp_file_path(&file_name);
            let size = match write_temp_file(&mut field, &temp_path).await {
                Ok(size) => size,
                Err(e) => {
                    remove_temp_file(&temp_path).await;
                    return Err(e);
                }
            };

            stored = Some(StoredUpload { temp_path, size });
            break;
        }

        let stored = match stored {
            Some(stored) => stored,
            None => {
                return Err(AppError::BadRequest(
                    "No file uploaded. Please select an image file to upload".to_string(),
                ))
            }
        };

        let image_host = match &self.image_host {
            Some(image_host) => image_host,
            None => {
                remove_temp_file(&stored.temp_path).await;
                return Err(AppError::Internal(
                    "Upload service not configured: image host API key is missing".to_string(),
                ));
            }
        };

        // la API del host recibe la imagen como base64 en un form
        let bytes = match tokio::fs::read(&stored.temp_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                remove_temp_file(&stored.temp_path).await;
                return Err(AppError::Internal(format!(
                    "Failed to read uploaded file: {}",
                    e
                )));
            }
        };

        let result = image_host.upload_image(&BASE64.encode(&bytes)).await;
        remove_temp_file(&stored.temp_path).await;
        let hosted = result?;

        log::info!("✅ Upload complete: {} ({} bytes)", hosted.url, stored.size);

        Ok(UploadResponse {
            success: true,
            data: UploadedImageData {
                url: hosted.url,
                display_url: hosted.display_url,
                delete_url: hosted.delete_url,
                thumb: hosted.thumb,
                medium: hosted.medium,
                size: stored.size,
            },
        })
    }
}

/// Nombre del temporal: único por subida, conservando la extensión
/// original para poder inspeccionar el archivo a mano si hace falta
fn temp_file_path(file_name: &str) -> PathBuf {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    std::env::temp_dir().join(format!("upload_{}{}", Uuid::new_v4(), extension))
}

/// Volcar el campo al temporal aplicando el techo de 10 MB por el camino
async fn write_temp_file(field: &mut Field<'_>, temp_path: &Path) -> AppResult<u64> {
    let mut file = tokio::fs::File::create(temp_path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create temp file: {}", e)))?;

    let mut size: u64 = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?
    {
        size += chunk.len() as u64;
        if size > MAX_UPLOAD_SIZE_BYTES {
            return Err(AppError::BadRequest(
                "File too large. Maximum file size is 10MB".to_string(),
            ));
        }
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write temp file: {}", e)))?;
    }

    file.flush()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to write temp file: {}", e)))?;

    Ok(size)
}

/// La limpieza del temporal nunca tumba la respuesta: se loggea y se sigue
async fn remove_temp_file(temp_path: &Path) {
    if let Err(e) = tokio::fs::remove_file(temp_path).await {
        log::warn!(
            "⚠️ Could not delete temp file {}: {}",
            temp_path.display(),
            e
        );
    }
}
