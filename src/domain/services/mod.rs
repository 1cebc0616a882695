//! # Domain Services
//!
//! Pure pricing logic with no shared state.
//!
//! - [`PricingStrategy`]: Base price per [`PricingStrategyKind`](crate::domain::value_objects::PricingStrategyKind)
//! - [`ServiceDecorator`] and [`SurchargeChain`]: Add-on surcharges

pub mod pricing;
pub mod surcharge;

pub use pricing::PricingStrategy;
pub use surcharge::{ChainOutcome, ServiceDecorator, SurchargeChain};
