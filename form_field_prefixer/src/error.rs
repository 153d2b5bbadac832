//! Error types produced while loading prefixer configuration.
//!
//! Building identifiers never fails; only configuration loading does.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while loading a [`PrefixerConfig`](crate::PrefixerConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrefixerError {
    /// Error while extracting configuration from its providers.
    #[error("Failed to load form field prefixer configuration: {0}")]
    Config(#[from] Box<FigmentError>),

    /// A configured value is unusable.
    #[error("Invalid configuration for '{key}': {message}")]
    InvalidConfig {
        /// Configuration key that failed validation.
        key: String,
        /// Human-readable explanation of the failure.
        message: String,
    },
}

impl From<FigmentError> for PrefixerError {
    fn from(error: FigmentError) -> Self {
        Self::Config(Box::new(error))
    }
}

impl PrefixerError {
    /// Construct an [`PrefixerError::InvalidConfig`] for `key`.
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.to_owned(),
            message: message.into(),
        }
    }
}

/// Result alias for configuration loading.
pub type PrefixerResult<T> = Result<T, PrefixerError>;
