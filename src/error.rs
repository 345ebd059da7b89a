//! Crate-level error types.

use std::fmt;

/// Errors produced by the bulbcam crate.
#[derive(Debug)]
pub enum BulbError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Attempted to invert a matrix whose determinant is exactly zero.
    SingularMatrix {
        /// Determinant computed for the rejected matrix.
        determinant: f32,
    },
}

impl fmt::Display for BulbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SingularMatrix { determinant } => {
                write!(f, "non-invertible matrix (determinant {determinant})")
            }
        }
    }
}

impl std::error::Error for BulbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BulbError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for BulbError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_matrix_message_names_determinant() {
        let err = BulbError::SingularMatrix { determinant: 0.0 };
        assert_eq!(err.to_string(), "non-invertible matrix (determinant 0)");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = BulbError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
