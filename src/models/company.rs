//! Modelo de Company
//!
//! Empresas dueñas de staff y vehículos. Cada empresa recibe un código
//! de verificación de 4 caracteres que el staff debe citar al registrarse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Company - mapea a la tabla companies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub tel: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub verify_code: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una empresa (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 2, max = 128))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub tel: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 256))]
    pub address: String,
}

/// Response de empresa - incluye el código de verificación porque
/// solo los admins acceden a estos endpoints
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub tel: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub verify_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            tel: company.tel,
            phone: company.phone,
            email: company.email,
            address: company.address,
            verify_code: company.verify_code,
            created_at: company.created_at,
        }
    }
}
