//! Middleware de CORS
//!
//! La API es pública: el frontend se sirve desde otros dominios, así que
//! cualquier origen puede llamar a cualquier endpoint, preflight incluido.

use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// CORS abierto a cualquier origen
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// CORS restringido a orígenes concretos, con la lista de headers que
/// mandan los clientes de la aplicación. Para despliegues donde el
/// frontend vive en dominios conocidos.
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(&origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("x-csrf-token"),
        HeaderName::from_static("x-requested-with"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("accept-version"),
        HeaderName::from_static("content-length"),
        HeaderName::from_static("content-md5"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("date"),
        HeaderName::from_static("x-api-version"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
