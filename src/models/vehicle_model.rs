//! Modelo de VehicleModel
//!
//! Entradas de catálogo que agrupan vehículos para los listados de venta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Tipo de modelo de vehículo - mapea al ENUM vehicle_model_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_model_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleModelType {
    Car,
    Van,
    Bus,
}

/// VehicleModel - mapea a la tabla vehicle_models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleModel {
    pub id: Uuid,
    pub model_type: VehicleModelType,
    pub name: String,
    /// Número de pasajeros
    pub seats: i32,
    /// Precio de alquiler
    pub amount: Decimal,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una entrada de catálogo (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleModelRequest {
    pub model_type: VehicleModelType,

    #[validate(length(min = 2, max = 64))]
    pub name: String,

    #[validate(range(min = 1, max = 100))]
    pub seats: i32,

    pub amount: Decimal,
}

/// Response del listado de venta: la entrada de catálogo más el número
/// de vehículos libres para la ventana consultada
#[derive(Debug, Serialize)]
pub struct VehicleModelSellResponse {
    pub id: Uuid,
    pub model_type: VehicleModelType,
    pub name: String,
    pub seats: i32,
    pub amount: Decimal,
    pub photo: Option<String>,
    pub available_count: i64,
}

impl VehicleModelSellResponse {
    pub fn from_model(model: VehicleModel, available_count: i64) -> Self {
        Self {
            id: model.id,
            model_type: model.model_type,
            name: model.name,
            seats: model.seats,
            amount: model.amount,
            photo: model.photo,
            available_count,
        }
    }
}
