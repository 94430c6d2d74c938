//! Cliente del host de imágenes
//!
//! El endpoint de subida no guarda blobs: delega en la API de ImgBB y
//! devuelve las URLs públicas que responde el host. El trait existe
//! para poder montar un host de mentira en los tests.

use async_trait::async_trait;
use serde::Deserialize;

use crate::utils::errors::AppError;

const IMGBB_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Presupuesto de la llamada al host externo
const UPLOAD_TIMEOUT_SECS: u64 = 8;

/// Imagen ya alojada en el host externo
#[derive(Debug, Clone)]
pub struct HostedImage {
    pub url: String,
    pub display_url: String,
    pub delete_url: String,
    pub thumb: Option<String>,
    pub medium: Option<String>,
}

/// Escritura de blobs en un host de imágenes externo
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Subir una imagen codificada en base64 y devolver sus URLs públicas
    async fn upload_image(&self, base64_image: &str) -> Result<HostedImage, AppError>;
}

#[derive(Debug, Deserialize)]
struct ImgBbResponse {
    #[serde(default)]
    success: bool,
    data: Option<ImgBbData>,
    error: Option<ImgBbError>,
}

#[derive(Debug, Deserialize)]
struct ImgBbData {
    url: String,
    display_url: String,
    delete_url: String,
    thumb: Option<ImgBbImageRef>,
    medium: Option<ImgBbImageRef>,
}

#[derive(Debug, Deserialize)]
struct ImgBbImageRef {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ImgBbError {
    message: String,
}

/// Cliente HTTP de la API de ImgBB
pub struct ImgBbClient {
    api_key: String,
    client: reqwest::Client,
}

impl ImgBbClient {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }
}

#[async_trait]
impl ImageHost for ImgBbClient {
    async fn upload_image(&self, base64_image: &str) -> Result<HostedImage, AppError> {
        log::info!(
            "🖼️ Uploading image to ImgBB ({} base64 bytes)",
            base64_image.len()
        );

        let url = format!(
            "{}?key={}",
            IMGBB_UPLOAD_URL,
            urlencoding::encode(&self.api_key)
        );

        // expiration=0 pide almacenamiento sin caducidad
        let response = self
            .client
            .post(&url)
            .form(&[("image", base64_image), ("expiration", "0")])
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Failed to reach image host: {}", e)))?;

        let status = response.status();
        let body: ImgBbResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid image host response: {}", e)))?;

        if !status.is_success() || !body.success {
            let message = body
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| format!("image host returned status {}", status));
            log::error!("❌ Image host rejected the upload: {}", message);
            return Err(AppError::ExternalApi(message));
        }

        let data = body.data.ok_or_else(|| {
            AppError::ExternalApi("image host response missing data".to_string())
        })?;

        log::info!("✅ Image hosted at {}", data.url);

        Ok(HostedImage {
            url: data.url,
            display_url: data.display_url,
            delete_url: data.delete_url,
            thumb: data.thumb.map(|t| t.url),
            medium: data.medium.map(|m| m.url),
        })
    }
}
