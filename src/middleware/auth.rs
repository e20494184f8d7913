//! Middleware de autenticación JWT
//!
//! Este módulo maneja la generación y validación de tokens JWT y expone
//! los extractores `AuthenticatedStaff` y `AdminStaff` que inyectan la
//! identidad en los handlers. Sin token válido las rutas con identidad
//! responden 401; las rutas de admin responden 403 para no-admins.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::EnvironmentConfig,
    models::{staff::Staff, SubjectStatus},
    repositories::staff_repository::StaffRepository,
    state::AppState,
    utils::errors::{AppError, AppResult},
};

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// staff_id
    pub sub: String,
    pub company_id: String,
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

/// Generar un token JWT para un staff
pub fn generate_jwt_token(staff: &Staff, config: &EnvironmentConfig) -> AppResult<String> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: staff.id.to_string(),
        company_id: staff.company_id.to_string(),
        is_admin: staff.is_admin,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generando JWT: {}", e)))
}

/// Decodificar y validar un token JWT
pub fn decode_claims(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))
}

/// Extraer el token Bearer del header Authorization
///
/// Las rutas con identidad responden 401 cuando falta o está malformado.
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))
}

/// Staff autenticado que se inyecta en los handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedStaff {
    pub staff: Staff,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedStaff {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = decode_claims(token, &state.config.jwt_secret)?;

        let staff_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("ID de staff inválido".to_string()))?;

        // Verificar que el staff existe y sigue habilitado
        let repository = StaffRepository::new(state.pool.clone());
        let staff = repository
            .find_by_id(staff_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Staff no encontrado".to_string()))?;

        if staff.status != SubjectStatus::Enabled {
            return Err(AppError::Unauthorized(
                "Staff inactivo o deshabilitado".to_string(),
            ));
        }

        Ok(Self { staff })
    }
}

/// Staff autenticado con permisos de administrador
#[derive(Debug, Clone)]
pub struct AdminStaff {
    pub staff: Staff,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminStaff {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let authenticated = AuthenticatedStaff::from_request_parts(parts, state).await?;

        if !authenticated.staff.is_admin {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador".to_string(),
            ));
        }

        Ok(Self {
            staff: authenticated.staff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
            media_root: "media".to_string(),
            max_photo_bytes: 1024,
        }
    }

    fn test_staff(is_admin: bool) -> Staff {
        Staff {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            model_id: None,
            username: "driver01".to_string(),
            password_hash: "hash".to_string(),
            name: "Jean Dupont".to_string(),
            phone: "0612345678".to_string(),
            nickname: "JD".to_string(),
            introduction: String::new(),
            photo: None,
            status: SubjectStatus::Enabled,
            accept: true,
            hour_pay: Decimal::ZERO,
            driver: true,
            tourguide: false,
            is_admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_jwt_round_trip() {
        let config = test_config();
        let staff = test_staff(true);

        let token = generate_jwt_token(&staff, &config).unwrap();
        let claims = decode_claims(&token, &config.jwt_secret).unwrap();

        assert_eq!(claims.sub, staff.id.to_string());
        assert_eq!(claims.company_id, staff.company_id.to_string());
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let config = test_config();
        let staff = test_staff(false);

        let token = generate_jwt_token(&staff, &config).unwrap();
        assert!(decode_claims(&token, "otro-secret").is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_claims("not-a-token", "test-secret").is_err());
    }

    #[test]
    fn test_bearer_token_missing_header_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_bearer_token_extracts_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
