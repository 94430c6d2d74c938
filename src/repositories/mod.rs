//! Repositorios de acceso a datos

pub mod location_repository;
pub mod route_repository;
