//! Modelo de Staff
//!
//! Personal reservable (conductores y guías). El staff se registra con el
//! código de verificación de su empresa y nunca se borra físicamente:
//! se deshabilita vía `status`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::SubjectStatus;

/// Staff - mapea a la tabla staff
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Staff {
    pub id: Uuid,
    pub company_id: Uuid,
    /// Especialización opcional en un modelo de vehículo
    pub model_id: Option<Uuid>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub nickname: String,
    pub introduction: String,
    pub photo: Option<String>,
    pub status: SubjectStatus,
    /// Bandera de disponibilidad: el staff puede pausar la recepción de órdenes
    pub accept: bool,
    pub hour_pay: Decimal,
    pub driver: bool,
    pub tourguide: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Request de auto-registro de staff
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(min = 2, max = 64))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(length(min = 1, max = 64))]
    pub nickname: String,

    #[validate(length(max = 256))]
    pub introduction: Option<String>,

    /// Código de verificación emitido a la empresa
    #[validate(custom = "crate::utils::validation::validate_verify_code")]
    pub verify_code: String,

    pub driver: Option<bool>,
    pub tourguide: Option<bool>,
    pub hour_pay: Option<Decimal>,
}

/// Request para actualizar un staff existente
///
/// Los campos marcados como "solo admin" se rechazan con 403 cuando el
/// solicitante no es administrador.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStaffRequest {
    #[validate(length(min = 1, max = 64))]
    pub nickname: Option<String>,

    #[validate(length(max = 256))]
    pub introduction: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    pub accept: Option<bool>,

    // Solo admin
    pub status: Option<SubjectStatus>,
    pub hour_pay: Option<Decimal>,
    pub driver: Option<bool>,
    pub tourguide: Option<bool>,
    pub model_id: Option<Uuid>,
}

impl UpdateStaffRequest {
    /// Campos que solo un administrador puede tocar
    pub fn touches_admin_fields(&self) -> bool {
        self.status.is_some()
            || self.hour_pay.is_some()
            || self.driver.is_some()
            || self.tourguide.is_some()
            || self.model_id.is_some()
    }
}

/// Request para subir la foto del propio perfil (base64)
#[derive(Debug, Deserialize, Validate)]
pub struct UploadPhotoRequest {
    #[validate(length(min = 1, max = 128))]
    pub filename: String,

    /// Contenido del archivo codificado en base64
    #[validate(length(min = 1))]
    pub data: String,
}

/// Response de staff para la API (sin password_hash)
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub model_id: Option<Uuid>,
    pub username: String,
    pub name: String,
    pub phone: String,
    pub nickname: String,
    pub introduction: String,
    pub photo: Option<String>,
    pub status: SubjectStatus,
    pub accept: bool,
    pub hour_pay: Decimal,
    pub driver: bool,
    pub tourguide: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Staff> for StaffResponse {
    fn from(staff: Staff) -> Self {
        Self {
            id: staff.id,
            company_id: staff.company_id,
            model_id: staff.model_id,
            username: staff.username,
            name: staff.name,
            phone: staff.phone,
            nickname: staff.nickname,
            introduction: staff.introduction,
            photo: staff.photo,
            status: staff.status,
            accept: staff.accept,
            hour_pay: staff.hour_pay,
            driver: staff.driver,
            tourguide: staff.tourguide,
            is_admin: staff.is_admin,
            created_at: staff.created_at,
        }
    }
}

/// Filtros para el listado de staff disponible
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffFilters {
    pub driver: Option<bool>,
    pub tourguide: Option<bool>,
    /// Filtrar staff especializado por modelo de vehículo
    pub model_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_admin_fields() {
        let request = UpdateStaffRequest {
            nickname: Some("nick".to_string()),
            introduction: None,
            phone: None,
            accept: Some(false),
            status: None,
            hour_pay: None,
            driver: None,
            tourguide: None,
            model_id: None,
        };
        assert!(!request.touches_admin_fields());

        let request = UpdateStaffRequest {
            nickname: None,
            introduction: None,
            phone: None,
            accept: None,
            status: Some(SubjectStatus::Disabled),
            hour_pay: None,
            driver: None,
            tourguide: None,
            model_id: None,
        };
        assert!(request.touches_admin_fields());
    }

    #[test]
    fn test_signup_request_validation() {
        use validator::Validate;

        let request = SignupRequest {
            username: "driver01".to_string(),
            password: "secret123".to_string(),
            name: "Jean Dupont".to_string(),
            phone: "0612345678".to_string(),
            nickname: "JD".to_string(),
            introduction: None,
            verify_code: "A1B2".to_string(),
            driver: Some(true),
            tourguide: None,
            hour_pay: None,
        };
        assert!(request.validate().is_ok());

        let bad_phone = SignupRequest {
            phone: "not-a-phone".to_string(),
            ..request
        };
        assert!(bad_phone.validate().is_err());
    }
}
