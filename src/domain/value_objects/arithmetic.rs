//! # Checked Arithmetic
//!
//! Safe decimal arithmetic and currency rounding.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for overflow-checked operations
//! - [`round_currency`] - Half-up rounding to two decimal places
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::value_objects::arithmetic::{round_currency, CheckedArithmetic};
//! use rust_decimal::Decimal;
//!
//! let base = Decimal::new(6500, 2);
//! let adjusted = base.safe_mul(Decimal::new(115, 2)).unwrap();
//! assert_eq!(round_currency(adjusted), Decimal::new(7475, 2));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places a currency amount is rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Implementors must never panic: overflow is reported as
/// `Err(ArithmeticError::Overflow)` and underflow as
/// `Err(ArithmeticError::Underflow)`.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Rounds an amount to cents, half-up.
///
/// Midpoints round away from zero, so `106.335` becomes `106.34`.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::arithmetic::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(106335, 3)), Decimal::new(10634, 2));
/// assert_eq!(round_currency(Decimal::new(106334, 3)), Decimal::new(10633, 2));
/// ```
#[inline]
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
