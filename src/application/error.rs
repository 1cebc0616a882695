//! # Application Errors
//!
//! Error types for wiring the engine into a process: loading settings and
//! installing the shared store, plus the domain failures surfaced by quoting.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)       - Quote validation failures
//! ├── Configuration(String)     - Settings could not be loaded or parsed
//! └── StoreAlreadyInitialized   - Second attempt to install the global store
//! ```
//!
//! # Examples
//!
//! ```
//! use freight_quote::application::error::ApplicationError;
//! use freight_quote::domain::errors::DomainError;
//! use freight_quote::domain::value_objects::AddOnService;
//!
//! let err = ApplicationError::configuration("missing file");
//! assert!(err.to_string().contains("missing file"));
//!
//! let err: ApplicationError = DomainError::DuplicateService(AddOnService::Toll).into();
//! assert!(err.is_domain());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from quote computation or rate validation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The process-wide store was already created.
    #[error("config store already initialized")]
    StoreAlreadyInitialized,
}

impl ApplicationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if this wraps a domain error.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Always false: nothing in this crate fails transiently.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
