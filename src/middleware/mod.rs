//! Middleware HTTP
//!
//! Autenticación JWT y configuración de CORS.

pub mod auth;
pub mod cors;
