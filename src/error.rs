//! Error types for the application surface
//!
//! The playback engine itself does not fail: navigation clamps and invalid
//! speeds are rejected in place, and an empty generator output is replaced
//! by a placeholder step. What can go wrong is a bad configuration file or
//! terminal I/O.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgottyError>;

#[derive(Debug, Error)]
pub enum AlgottyError {
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AlgottyError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AlgottyError::config("/tmp/algotty.json", "expected a number");
        assert_eq!(
            err.to_string(),
            "invalid configuration in /tmp/algotty.json: expected a number"
        );

        let err: AlgottyError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "gone");

        assert!(AlgottyError::invalid_config("x")
            .to_string()
            .starts_with("invalid configuration:"));
    }
}
