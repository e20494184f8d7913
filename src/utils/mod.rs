//! Utilidades compartidas
//!
//! Manejo de errores, validación, paginación y generación de códigos.

pub mod codes;
pub mod errors;
pub mod pagination;
pub mod validation;
