//! Repositorios de acceso a datos
//!
//! Un repositorio por agregado. Todo el SQL vive aquí; los listados
//! con ventana replican el predicado del filtro de disponibilidad.

pub mod company_repository;
pub mod order_repository;
pub mod staff_repository;
pub mod vehicle_model_repository;
pub mod vehicle_repository;
