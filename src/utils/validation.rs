//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los DTOs de la API.

use validator::ValidationError;

/// Validar que un string no sea solo espacios en blanco
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de número de IVA (básico)
pub fn validate_vat_number(value: &str) -> Result<(), ValidationError> {
    // El límite de 32 es sobre el valor crudo, separadores incluidos:
    // es lo que admite la columna vat_number.
    if value.len() > 32 {
        let mut error = ValidationError::new("vat_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    let clean_vat = value.replace([' ', '-', '.'], "");
    if clean_vat.len() < 4 {
        let mut error = ValidationError::new("vat_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    if !clean_vat.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut error = ValidationError::new("vat_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Demo Srl").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_validate_vat_number() {
        assert!(validate_vat_number("IT00000000000").is_ok());
        assert!(validate_vat_number("IT 0000000-0000").is_ok());
        assert!(validate_vat_number(&"9".repeat(32)).is_ok());
        assert!(validate_vat_number("IT1").is_err());
        assert!(validate_vat_number("IT@00000000000").is_err());
        assert!(validate_vat_number(&"X".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_vat_number_bounds_raw_length() {
        // 33 caracteres crudos por los separadores, aunque limpio queden 17
        let vat = "1-1-1-1-1-1-1-1-1-1-1-1-1-1-1-1-1";
        assert_eq!(vat.len(), 33);
        assert!(validate_vat_number(vat).is_err());
    }
}
