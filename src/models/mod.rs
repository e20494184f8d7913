//! Modelos de dominio
//!
//! Structs que mapean a las tablas de PostgreSQL junto con sus
//! requests/responses de la API.

pub mod company;
pub mod order;
pub mod staff;
pub mod vehicle;
pub mod vehicle_model;

use serde::{Deserialize, Serialize};
use sqlx::Type;

/// Estado de un sujeto reservable (staff o vehículo) - mapea al ENUM subject_status
///
/// Los sujetos nunca se borran físicamente; se deshabilitan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "subject_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubjectStatus {
    Enabled,
    Disabled,
}
