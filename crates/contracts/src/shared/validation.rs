use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single control failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("el campo es obligatorio")]
    Empty,

    #[error("debe tener al menos {min} caracteres (tiene {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("debe seleccionar un archivo")]
    MissingFile,
}

/// Result of validating one control
pub type Validity = Result<(), ValidationError>;

/// Per-control validator options.
///
/// Mirrors the options a form input is configured with: `empty_string`
/// rejects blank values, `min_length` rejects values shorter than `n`
/// characters. Values are trimmed before any check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub empty_string: bool,
    pub min_length: Option<usize>,
}

impl ValidatorConfig {
    pub const fn non_empty() -> Self {
        Self {
            empty_string: true,
            min_length: None,
        }
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn check(&self, value: &str, required: bool) -> Validity {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            // An optional field nobody touched is fine.
            return if required || self.empty_string {
                Err(ValidationError::Empty)
            } else {
                Ok(())
            };
        }

        if let Some(min) = self.min_length {
            let actual = trimmed.chars().count();
            if actual < min {
                return Err(ValidationError::TooShort { min, actual });
            }
        }

        Ok(())
    }
}

/// Validity of a file control
pub fn check_file(present: bool, required: bool) -> Validity {
    if required && !present {
        Err(ValidationError::MissingFile)
    } else {
        Ok(())
    }
}
