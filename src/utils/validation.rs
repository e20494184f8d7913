//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los structs `Validate` de los modelos.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Teléfonos: dígitos con prefijo internacional opcional
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9]{7,15}$").expect("invalid phone regex");

    /// Código de verificación de empresa: 4 caracteres alfanuméricos en mayúsculas
    static ref VERIFY_CODE_RE: Regex =
        Regex::new(r"^[A-Z0-9]{4}$").expect("invalid verify code regex");
}

/// Validar formato de teléfono
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_RE.is_match(value) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato del código de verificación de empresa
pub fn validate_verify_code(value: &str) -> Result<(), ValidationError> {
    if !VERIFY_CODE_RE.is_match(value) {
        let mut error = ValidationError::new("verify_code");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone_accepts_digits() {
        assert!(validate_phone("0612345678").is_ok());
        assert!(validate_phone("+33612345678").is_ok());
    }

    #[test]
    fn test_validate_phone_rejects_garbage() {
        assert!(validate_phone("phone").is_err());
        assert!(validate_phone("06 12 34").is_err());
        assert!(validate_phone("123").is_err());
    }

    #[test]
    fn test_validate_verify_code() {
        assert!(validate_verify_code("A1B2").is_ok());
        assert!(validate_verify_code("abcd").is_err());
        assert!(validate_verify_code("A1B23").is_err());
    }
}
