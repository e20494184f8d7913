//! Servicio de archivos de medios
//!
//! Guarda las fotos de perfil del staff bajo el directorio de medios.
//! Las fotos llegan como base64 en el body porque la API es JSON puro.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use uuid::Uuid;

use crate::{
    config::EnvironmentConfig,
    models::staff::UploadPhotoRequest,
    utils::errors::{AppError, AppResult},
};

const PHOTO_DIR: &str = "photos";
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Normalizar un nombre de archivo subido
///
/// Solo se conservan caracteres alfanuméricos, guiones y guiones bajos
/// del nombre; la extensión debe ser de imagen.
pub fn sanitize_file_name(filename: &str) -> AppResult<String> {
    let (stem, extension) = filename
        .rsplit_once('.')
        .ok_or_else(|| AppError::BadRequest("El archivo no tiene extensión".to_string()))?;

    let extension = extension.to_ascii_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Extensión '{}' no permitida",
            extension
        )));
    }

    let mut stem: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(64)
        .collect();
    if stem.is_empty() {
        stem = "photo".to_string();
    }

    Ok(format!("{}.{}", stem, extension))
}

/// Guardar la foto de perfil de un staff
///
/// Devuelve la ruta relativa al directorio de medios que se persiste
/// en el registro del staff.
pub async fn save_photo(
    config: &EnvironmentConfig,
    staff_id: Uuid,
    request: &UploadPhotoRequest,
) -> AppResult<String> {
    let file_name = sanitize_file_name(&request.filename)?;

    let bytes = STANDARD
        .decode(request.data.as_bytes())
        .map_err(|_| AppError::BadRequest("El contenido no es base64 válido".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::BadRequest("El archivo está vacío".to_string()));
    }
    if bytes.len() > config.max_photo_bytes {
        return Err(AppError::BadRequest(format!(
            "El archivo supera el máximo de {} bytes",
            config.max_photo_bytes
        )));
    }

    let relative_path = format!("{}/{}_{}", PHOTO_DIR, staff_id, file_name);
    let directory = Path::new(&config.media_root).join(PHOTO_DIR);

    tokio::fs::create_dir_all(&directory)
        .await
        .map_err(|e| AppError::Internal(format!("Error creando directorio de medios: {}", e)))?;

    let destination = Path::new(&config.media_root).join(&relative_path);
    tokio::fs::write(&destination, &bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Error guardando la foto: {}", e)))?;

    Ok(relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(media_root: String) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
            media_root,
            max_photo_bytes: 64,
        }
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("avatar.PNG").unwrap(), "avatar.png");
        assert_eq!(
            sanitize_file_name("../../etc/passwd.jpg").unwrap(),
            "etcpasswd.jpg"
        );
        assert!(sanitize_file_name("script.exe").is_err());
        assert!(sanitize_file_name("noextension").is_err());
    }

    #[tokio::test]
    async fn test_save_photo_rejects_invalid_base64() {
        let config = test_config("media".to_string());
        let request = UploadPhotoRequest {
            filename: "avatar.png".to_string(),
            data: "$$$ not base64 $$$".to_string(),
        };

        let result = save_photo(&config, Uuid::new_v4(), &request).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_save_photo_rejects_oversized_file() {
        let config = test_config("media".to_string());
        let request = UploadPhotoRequest {
            filename: "avatar.png".to_string(),
            data: STANDARD.encode(vec![0u8; 128]),
        };

        let result = save_photo(&config, Uuid::new_v4(), &request).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_save_photo_writes_file() {
        let media_root = std::env::temp_dir()
            .join(format!("fleet-dispatch-test-{}", Uuid::new_v4()))
            .to_string_lossy()
            .to_string();
        let config = test_config(media_root.clone());
        let staff_id = Uuid::new_v4();
        let request = UploadPhotoRequest {
            filename: "avatar.png".to_string(),
            data: STANDARD.encode(b"fake image bytes"),
        };

        let relative = save_photo(&config, staff_id, &request).await.unwrap();
        assert_eq!(relative, format!("photos/{}_avatar.png", staff_id));

        let saved = std::path::Path::new(&media_root).join(&relative);
        assert!(saved.exists());

        tokio::fs::remove_dir_all(&media_root).await.ok();
    }
}
