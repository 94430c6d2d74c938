//! Servicios de la aplicación

pub mod demo_data;
pub mod image_host_service;
