//! Rutas de la API
//!
//! Un router por recurso, montados bajo /api en main.

pub mod auth_routes;
pub mod company_routes;
pub mod order_routes;
pub mod staff_routes;
pub mod vehicle_model_routes;
pub mod vehicle_routes;
