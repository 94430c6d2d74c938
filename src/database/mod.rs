//! Módulo de base de datos
//!
//! Maneja el pool de conexiones y las migraciones de PostgreSQL

pub mod connection;
