//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub media_root: String,
    pub max_photo_bytes: usize,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde el entorno
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            media_root: env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string()),
            max_photo_bytes: env::var("MAX_PHOTO_BYTES")
                .unwrap_or_else(|_| "5242880".to_string())
                .parse()
                .expect("MAX_PHOTO_BYTES must be a valid number"),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn test_config() -> EnvironmentConfig {
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

    #[test]
    fn test_server_url() {
        let config = test_config();
        assert_eq!(config.server_url(), "127.0.0.1:3000");
        assert!(!config.is_development());
    }
}
