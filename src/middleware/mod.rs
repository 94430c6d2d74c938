//! Middleware HTTP

pub mod cors;
