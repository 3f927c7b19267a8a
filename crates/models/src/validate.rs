//! Pure value checks applied to payloads before anything touches storage.
use chrono::{Datelike, Utc};

use crate::errors::ModelError;

pub const MIN_YEAR: i32 = 1900;

pub fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{} required", field)));
    }
    Ok(())
}

/// Release year must fall between 1900 and the current calendar year.
pub fn validate_year(year: i32) -> Result<(), ModelError> {
    let current = Utc::now().year();
    if year < MIN_YEAR || year > current {
        return Err(ModelError::Validation(format!(
            "year must be between {} and {}",
            MIN_YEAR, current
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    #[test]
    fn empty_text_is_rejected() {
        assert!(require_text("name", "").is_err());
        assert!(require_text("name", "   ").is_err());
        assert!(require_text("name", "Viva la Vida").is_ok());
    }

    #[test]
    fn year_below_floor_is_rejected() {
        assert!(validate_year(1899).is_err());
        assert!(validate_year(1900).is_ok());
    }

    #[test]
    fn future_year_is_rejected() {
        let current = Utc::now().year();
        assert!(validate_year(current).is_ok());
        assert!(validate_year(current + 1).is_err());
    }

    #[test]
    fn validation_error_names_the_bounds() {
        let err = validate_year(1800).unwrap_err();
        assert!(err.to_string().contains("1900"));
    }
}
