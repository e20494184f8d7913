//! Controladores
//!
//! Orquestan validación, permisos y repositorios; los handlers de las
//! rutas quedan finos.

pub mod company_controller;
pub mod order_controller;
pub mod staff_controller;
pub mod vehicle_controller;
pub mod vehicle_model_controller;
