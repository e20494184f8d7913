//! Modelos de órdenes
//!
//! Dos variantes de reserva acotada en el tiempo: órdenes de staff y
//! órdenes de vehículo. Comparten las columnas comunes (número de orden,
//! monto, ventana, estados) y cada variante agrega sus propios campos.
//!
//! Invariante: `start_time <= end_time`, verificado en creación y
//! actualización antes de persistir nada.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::{validation_error, AppResult};

/// Estado de una orden - mapea al ENUM order_status
///
/// Las órdenes `void` quedan fuera de toda consideración de conflicto
/// y de los listados.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    InProgress,
    Completed,
    Void,
}

/// Estado de pago - mapea al ENUM pay_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "pay_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PayStatus {
    Paid,
    Unpaid,
    Refunded,
}

/// Tipo de cliente - mapea al ENUM client_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "client_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Company,
    Personal,
}

/// Estado de liquidación de una orden de staff - mapea al ENUM settle_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "settle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SettleStatus {
    Unsettled,
    Settled,
}

/// Confirmación del staff asignado - mapea al ENUM staff_confirm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "staff_confirm", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StaffConfirm {
    Wait,
    Accept,
    Reject,
}

/// Modalidad de entrega de una orden de vehículo - mapea al ENUM pickup_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "pickup_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PickupType {
    #[sqlx(rename = "self")]
    #[serde(rename = "self")]
    SelfPickup,
    Send,
}

/// Orden de staff - mapea a la tabla staff_orders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StaffOrder {
    pub id: Uuid,
    pub order_no: String,
    pub staff_id: Uuid,
    pub amount: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: OrderStatus,
    pub pay_status: PayStatus,
    pub client_type: ClientType,
    pub settle_status: SettleStatus,
    pub staff_confirm: StaffConfirm,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

/// Orden de vehículo - mapea a la tabla vehicle_orders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleOrder {
    pub id: Uuid,
    pub order_no: String,
    pub vehicle_id: Uuid,
    pub amount: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: OrderStatus,
    pub pay_status: PayStatus,
    pub client_type: ClientType,
    pub pickup_type: PickupType,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una orden de staff
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStaffOrderRequest {
    pub staff_id: Uuid,
    pub amount: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub client_type: Option<ClientType>,

    #[validate(length(max = 256))]
    pub remark: Option<String>,
}

/// Request para crear una orden de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleOrderRequest {
    pub vehicle_id: Uuid,
    pub amount: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub client_type: Option<ClientType>,
    pub pickup_type: Option<PickupType>,

    #[validate(length(max = 256))]
    pub remark: Option<String>,
}

/// Request para actualizar una orden de staff
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStaffOrderRequest {
    pub status: Option<OrderStatus>,
    pub pay_status: Option<PayStatus>,
    pub settle_status: Option<SettleStatus>,
    pub staff_confirm: Option<StaffConfirm>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    #[validate(length(max = 256))]
    pub remark: Option<String>,
}

/// Request para actualizar una orden de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleOrderRequest {
    pub status: Option<OrderStatus>,
    pub pay_status: Option<PayStatus>,
    pub pickup_type: Option<PickupType>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    #[validate(length(max = 256))]
    pub remark: Option<String>,
}

/// Filtros para listados de órdenes
///
/// `subject_id` es el staff o el vehículo según la variante listada.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFilters {
    pub subject_id: Option<Uuid>,
    pub status: Option<OrderStatus>,
}

/// Verificar el invariante de ventana de una orden
///
/// Rechaza `start_time > end_time` con un error de validación a nivel
/// de campo; el mensaje es el mismo que siempre devolvió el backend.
pub fn validate_time_range(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> AppResult<()> {
    if start_time > end_time {
        return Err(validation_error(
            "end_time",
            "the end time must be after start time",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_time_range_accepts_ordered_window() {
        assert!(validate_time_range(ts(2024, 1, 10), ts(2024, 1, 15)).is_ok());
    }

    #[test]
    fn test_time_range_accepts_zero_length_window() {
        // Inclusivo: una orden puntual es válida
        assert!(validate_time_range(ts(2024, 1, 10), ts(2024, 1, 10)).is_ok());
    }

    #[test]
    fn test_time_range_rejects_inverted_window() {
        let err = validate_time_range(ts(2024, 1, 15), ts(2024, 1, 10)).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("end_time"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
