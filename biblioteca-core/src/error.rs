//! Error types for Biblioteca Core

use thiserror::Error;

/// Result type alias using ValidationError
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while validating form input, before anything reaches the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingRequired,

    #[error("Ano de publicação deve estar entre {min} e {max}.")]
    AnoOutOfRange { ano: i32, min: i32, max: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_toasts() {
        assert_eq!(
            ValidationError::MissingRequired.to_string(),
            "Por favor, preencha todos os campos obrigatórios."
        );
        assert_eq!(
            ValidationError::AnoOutOfRange {
                ano: 999,
                min: 1000,
                max: 2030
            }
            .to_string(),
            "Ano de publicação deve estar entre 1000 e 2030."
        );
    }
}
