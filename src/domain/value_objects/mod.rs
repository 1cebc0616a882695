//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Numeric
//!
//! - [`CheckedArithmetic`]: Overflow-checked decimal operations
//! - [`round_currency`]: Half-up rounding to cents
//!
//! ## Domain Enums
//!
//! - [`Zone`], [`ServiceLevel`], [`AddOnService`], [`PricingStrategyKind`]
//!
//! ## Configuration
//!
//! - [`RateTable`]: Base rates and surcharge constants

pub mod arithmetic;
pub mod enums;
pub mod rate_table;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, round_currency};
pub use enums::{AddOnService, ParseEnumError, PricingStrategyKind, ServiceLevel, Zone};
pub use rate_table::{RateTable, ZoneRates};
pub use timestamp::Timestamp;
