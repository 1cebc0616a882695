//! # Pricing Strategies
//!
//! Base-price algorithms selected per request.
//!
//! This module provides the [`PricingStrategy`] trait, implemented by the
//! closed [`PricingStrategyKind`] enum. The kind is chosen by the caller for
//! each quote; dispatch is a `match` onto one pure function per algorithm:
//!
//! ```text
//! ByZone   = zone_rate[zone]
//! ByWeight = weight_kg * per_kg_rate
//! ByVolume = max(volume_m3 * per_m3_rate, ByWeight)
//! Express  = ByZone * express_multiplier      (express shipments only)
//! ```
//!
//! Every algorithm first rejects non-positive weight or volume.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::ShipmentRequest;
//! use freight_quote::domain::services::pricing::PricingStrategy;
//! use freight_quote::domain::value_objects::{PricingStrategyKind, RateTable, Zone};
//! use rust_decimal::Decimal;
//!
//! let request = ShipmentRequest::builder("A", "B", Zone::Local)
//!     .weight_kg(Decimal::new(2, 0))
//!     .volume_m3(Decimal::new(1, 2))
//!     .build();
//! let base = PricingStrategyKind::ByWeight
//!     .compute_base(&request, &RateTable::default())
//!     .unwrap();
//! assert_eq!(base, Decimal::new(1700, 2));
//! ```

use crate::domain::entities::shipment::ShipmentRequest;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::enums::PricingStrategyKind;
use crate::domain::value_objects::rate_table::RateTable;
use rust_decimal::Decimal;

/// Computes the base price of a shipment.
pub trait PricingStrategy {
    /// Computes the base price before carrier adjustment and add-ons.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidShipment` if weight or volume is not positive
    /// - `DomainError::StrategyMismatch` for an express price on a
    ///   non-express shipment
    /// - `DomainError::Arithmetic` on overflow
    fn compute_base(&self, request: &ShipmentRequest, rates: &RateTable) -> DomainResult<Decimal>;

    /// Returns a human-readable name for breakdowns and logs.
    fn name(&self) -> &'static str;
}

impl PricingStrategy for PricingStrategyKind {
    fn compute_base(&self, request: &ShipmentRequest, rates: &RateTable) -> DomainResult<Decimal> {
        request.validate_dimensions()?;
        match self {
            Self::ByZone => Ok(by_zone(request, rates)),
            Self::ByWeight => by_weight(request, rates),
            Self::ByVolume => by_volume(request, rates),
            Self::Express => express(request, rates),
        }
    }

    fn name(&self) -> &'static str {
        self.label()
    }
}

fn by_zone(request: &ShipmentRequest, rates: &RateTable) -> Decimal {
    rates.zone_rate(request.zone())
}

fn by_weight(request: &ShipmentRequest, rates: &RateTable) -> DomainResult<Decimal> {
    Ok(request.weight_kg().safe_mul(rates.per_kg_rate)?)
}

fn by_volume(request: &ShipmentRequest, rates: &RateTable) -> DomainResult<Decimal> {
    let volumetric = request.volume_m3().safe_mul(rates.per_m3_rate)?;
    Ok(volumetric.max(by_weight(request, rates)?))
}

fn express(request: &ShipmentRequest, rates: &RateTable) -> DomainResult<Decimal> {
    if !request.express_requested() {
        return Err(DomainError::StrategyMismatch {
            strategy: PricingStrategyKind::Express,
        });
    }
    Ok(by_zone(request, rates).safe_mul(rates.express_multiplier)?)
}
