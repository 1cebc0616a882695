//! # Domain Errors
//!
//! Error taxonomy for quote computation.
//!
//! Every variant is a local validation failure: nothing is transient, so no
//! error is retryable and none is fatal to the process. The caller decides
//! whether to re-prompt or abort.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::errors::DomainError;
//! use freight_quote::domain::value_objects::AddOnService;
//!
//! let err = DomainError::DuplicateService(AddOnService::Insurance);
//! assert!(err.is_duplicate_service());
//! assert_eq!(err.to_string(), "duplicate add-on service: INSURANCE");
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::enums::{AddOnService, PricingStrategyKind};
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Weight or volume is not strictly positive.
    #[error("invalid shipment: {reason}")]
    InvalidShipment {
        /// What is wrong with the shipment.
        reason: String,
    },

    /// The chosen strategy is not allowed for this shipment.
    #[error("strategy {strategy} not applicable: express delivery was not requested")]
    StrategyMismatch {
        /// The strategy that was requested.
        strategy: PricingStrategyKind,
    },

    /// The same add-on service was requested more than once.
    #[error("duplicate add-on service: {0}")]
    DuplicateService(AddOnService),

    /// A rate constant is out of its allowed range.
    #[error("invalid rate {field}: {reason}")]
    InvalidRate {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid shipment error.
    #[must_use]
    pub fn invalid_shipment(reason: impl Into<String>) -> Self {
        Self::InvalidShipment {
            reason: reason.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if this is an invalid shipment error.
    #[must_use]
    pub fn is_invalid_shipment(&self) -> bool {
        matches!(self, Self::InvalidShipment { .. })
    }

    /// Returns true if this is a strategy mismatch error.
    #[must_use]
    pub fn is_strategy_mismatch(&self) -> bool {
        matches!(self, Self::StrategyMismatch { .. })
    }

    /// Returns true if this is a duplicate service error.
    #[must_use]
    pub fn is_duplicate_service(&self) -> bool {
        matches!(self, Self::DuplicateService(_))
    }

    /// Always false: quote failures are deterministic validation errors.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_shipment_message() {
        let err = DomainError::invalid_shipment("weight must be positive, got 0");
        assert!(err.is_invalid_shipment());
        assert!(err.to_string().contains("weight must be positive"));
    }

    #[test]
    fn strategy_mismatch_message() {
        let err = DomainError::StrategyMismatch {
            strategy: PricingStrategyKind::Express,
        };
        assert!(err.is_strategy_mismatch());
        assert!(err.to_string().contains("EXPRESS"));
    }

    #[test]
    fn duplicate_service_message() {
        let err = DomainError::DuplicateService(AddOnService::Toll);
        assert!(err.is_duplicate_service());
        assert!(err.to_string().contains("TOLL"));
    }

    #[test]
    fn invalid_rate_message() {
        let err = DomainError::invalid_rate("insurance_rate", "must not be negative");
        assert_eq!(
            err.to_string(),
            "invalid rate insurance_rate: must not be negative"
        );
    }

    #[test]
    fn from_arithmetic_error() {
        let err: DomainError = ArithmeticError::Overflow.into();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn nothing_is_retryable() {
        assert!(!DomainError::DuplicateService(AddOnService::Packaging).is_retryable());
        assert!(!DomainError::invalid_shipment("x").is_retryable());
    }
}
