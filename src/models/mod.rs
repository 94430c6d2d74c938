//! Modelos del dominio
//!
//! Structs que mapean a las tablas `routes` y `locations`, más la
//! convención de ids provisionales que usan los clientes.

pub mod location;
pub mod route;

pub use location::{Location, NewLocation};
pub use route::{NewRoute, Route, RouteWithLocations};

/// Los clientes generan ids provisionales con el timestamp en
/// milisegundos (~13 dígitos) para filas que todavía no existen en la
/// base de datos. Todo id por encima de este umbral va al camino de
/// inserción del guardado masivo; el resto al de update. La convención
/// es un sentinel numérico, no un tipo distinto.
pub const NEW_RECORD_ID_THRESHOLD: i64 = 1_000_000_000_000;

/// ¿Es `id` un id provisional generado por el cliente?
pub fn is_placeholder_id(id: i64) -> bool {
    id > NEW_RECORD_ID_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_placeholder_id(1));
        assert!(!is_placeholder_id(999_999_999_999));
        // el umbral exacto sigue siendo un id de base de datos
        assert!(!is_placeholder_id(NEW_RECORD_ID_THRESHOLD));
        assert!(is_placeholder_id(NEW_RECORD_ID_THRESHOLD + 1));
    }

    #[test]
    fn test_client_timestamps_are_placeholders() {
        // Date.now() actual: unos 1.7 billones de milisegundos
        assert!(is_placeholder_id(1_734_953_400_000));
    }
}
