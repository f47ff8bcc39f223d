use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Represents data validation errors (e.g., empty utterance, unknown label).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_validation_errors_convert() {
        let mut errors = ValidationErrors::new();
        errors.add("typing_delay_max_ms", ValidationError::new("range"));

        let err = AppError::from(errors);
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().starts_with("Validation error: "));
        assert!(err.to_string().contains("typing_delay_max_ms"));
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            AppError::Config("bad".to_string()).to_string(),
            "Configuration error: bad"
        );
        assert_eq!(
            AppError::Validation("empty".to_string()).to_string(),
            "Validation error: empty"
        );
    }
}
