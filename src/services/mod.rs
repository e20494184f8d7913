//! Servicios de la aplicación
//!
//! Lógica de negocio que no pertenece ni a los repositorios ni a los
//! controladores: disponibilidad, autenticación y archivos de medios.

pub mod auth_service;
pub mod availability_service;
pub mod media_service;
