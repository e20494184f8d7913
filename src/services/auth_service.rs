//! Servicio de autenticación
//!
//! Login de staff con username/password y emisión de tokens JWT.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::EnvironmentConfig,
    middleware::auth::generate_jwt_token,
    models::{staff::StaffResponse, SubjectStatus},
    repositories::staff_repository::StaffRepository,
    utils::errors::{AppError, AppResult},
};

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

/// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub staff: StaffResponse,
}

/// Servicio de autenticación
pub struct AuthService {
    repository: StaffRepository,
    config: EnvironmentConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: StaffRepository::new(pool),
            config,
        }
    }

    /// Autenticar un staff y emitir un JWT
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        // Mismo mensaje para username inexistente y password incorrecto
        let staff = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let password_ok = bcrypt::verify(&request.password, &staff.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verificando password: {}", e)))?;

        if !password_ok {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        if staff.status != SubjectStatus::Enabled {
            return Err(AppError::Unauthorized(
                "Staff inactivo o deshabilitado".to_string(),
            ));
        }

        let token = generate_jwt_token(&staff, &self.config)?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.jwt_expiration,
            staff: staff.into(),
        })
    }
}
