//! Controllers de los endpoints

pub mod location_controller;
pub mod route_controller;
pub mod upload_controller;
