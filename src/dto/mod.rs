//! DTOs de entrada y salida de la API

pub mod common;
pub mod location_dto;
pub mod route_dto;
pub mod upload_dto;
