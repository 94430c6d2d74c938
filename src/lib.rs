//! Route Manager - API de gestión de rutas de reparto y sus ubicaciones.
//!
//! Expone los endpoints REST que consume el frontend de planificación:
//! rutas, ubicaciones, guardado masivo y subida de imágenes. Sin
//! `DATABASE_URL` el servicio arranca en modo demo y sirve un dataset
//! fijo sin persistir escrituras.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
