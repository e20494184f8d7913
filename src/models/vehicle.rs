//! Modelo de Vehicle
//!
//! Activos físicos con números identificatorios únicos (motor, chasis,
//! matrícula, póliza) y fechas de cumplimiento.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::SubjectStatus;

/// Vehicle - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub company_id: Uuid,
    pub model_id: Uuid,
    pub eng_no: String,
    pub chassis_no: String,
    pub traffic_plate_no: String,
    /// Vencimiento del permiso de circulación
    pub exp_date: NaiveDate,
    pub reg_date: NaiveDate,
    /// Vencimiento del seguro
    pub ins_exp: NaiveDate,
    pub policy_no: String,
    pub status: SubjectStatus,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar un vehículo (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub company_id: Uuid,
    pub model_id: Uuid,

    #[validate(length(min = 2, max = 16))]
    pub eng_no: String,

    #[validate(length(min = 2, max = 32))]
    pub chassis_no: String,

    #[validate(length(min = 2, max = 16))]
    pub traffic_plate_no: String,

    pub exp_date: NaiveDate,
    pub reg_date: NaiveDate,
    pub ins_exp: NaiveDate,

    #[validate(length(min = 2, max = 32))]
    pub policy_no: String,
}

/// Request para actualizar estado y fechas de cumplimiento
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub status: Option<SubjectStatus>,
    pub exp_date: Option<NaiveDate>,
    pub ins_exp: Option<NaiveDate>,

    #[validate(length(min = 2, max = 32))]
    pub policy_no: Option<String>,

    pub model_id: Option<Uuid>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub model_id: Uuid,
    pub eng_no: String,
    pub chassis_no: String,
    pub traffic_plate_no: String,
    pub exp_date: NaiveDate,
    pub reg_date: NaiveDate,
    pub ins_exp: NaiveDate,
    pub policy_no: String,
    pub status: SubjectStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            company_id: vehicle.company_id,
            model_id: vehicle.model_id,
            eng_no: vehicle.eng_no,
            chassis_no: vehicle.chassis_no,
            traffic_plate_no: vehicle.traffic_plate_no,
            exp_date: vehicle.exp_date,
            reg_date: vehicle.reg_date,
            ins_exp: vehicle.ins_exp,
            policy_no: vehicle.policy_no,
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}

/// Filtros para el listado de vehículos
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleFilters {
    pub status: Option<SubjectStatus>,
    pub model_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
}
