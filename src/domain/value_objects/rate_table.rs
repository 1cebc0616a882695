//! # Rate Table
//!
//! Tunable pricing constants shared by every quote.
//!
//! This module provides:
//! - [`ZoneRates`]: Flat base price per [`Zone`]
//! - [`RateTable`]: All base rates, multipliers and surcharge amounts
//!
//! Rates are read-only once a [`ConfigStore`](crate::infrastructure::config_store::ConfigStore)
//! holds them; changing a rate means building a new table.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::value_objects::rate_table::RateTable;
//! use freight_quote::domain::value_objects::Zone;
//! use rust_decimal::Decimal;
//!
//! let rates = RateTable::default();
//! assert_eq!(rates.zone_rate(Zone::Regional), Decimal::new(6500, 2));
//! assert!(rates.validate().is_ok());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::Zone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat base price per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneRates {
    /// Base price for [`Zone::Local`].
    pub local: Decimal,
    /// Base price for [`Zone::Regional`].
    pub regional: Decimal,
    /// Base price for [`Zone::National`].
    pub national: Decimal,
    /// Base price for [`Zone::International`].
    pub international: Decimal,
}

impl ZoneRates {
    /// Returns the base price for a zone.
    #[inline]
    #[must_use]
    pub const fn get(&self, zone: Zone) -> Decimal {
        match zone {
            Zone::Local => self.local,
            Zone::Regional => self.regional,
            Zone::National => self.national,
            Zone::International => self.international,
        }
    }
}

impl Default for ZoneRates {
    fn default() -> Self {
        Self {
            local: Decimal::new(3000, 2),
            regional: Decimal::new(6500, 2),
            national: Decimal::new(12000, 2),
            international: Decimal::new(25000, 2),
        }
    }
}

/// Pricing constants for base prices and add-on surcharges.
///
/// Percentages are fractional (`0.04` = 4%). Multipliers are factors
/// (`2.5` = two and a half times).
///
/// # Invariants
///
/// Checked by [`RateTable::validate`]:
/// - zone rates, per-kg and per-m³ rates are strictly positive
/// - the express multiplier is at least 1
/// - surcharge amounts and the insurance rate are non-negative
/// - the currency symbol is not blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    /// Symbol printed in front of amounts.
    pub currency: String,
    /// Base price per zone.
    pub zone_rates: ZoneRates,
    /// Price per kilogram.
    pub per_kg_rate: Decimal,
    /// Price per cubic metre.
    pub per_m3_rate: Decimal,
    /// Factor applied to the zone rate by the express strategy.
    pub express_multiplier: Decimal,
    /// Flat toll surcharge.
    pub toll_flat: Decimal,
    /// Insurance surcharge as a fraction of the running price.
    pub insurance_rate: Decimal,
    /// Flat packaging surcharge.
    pub packaging_flat: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            currency: "R$".to_string(),
            zone_rates: ZoneRates::default(),
            per_kg_rate: Decimal::new(850, 2),
            per_m3_rate: Decimal::new(12000, 2),
            express_multiplier: Decimal::new(25, 1),
            toll_flat: Decimal::new(2750, 2),
            insurance_rate: Decimal::new(4, 2),
            packaging_flat: Decimal::new(2500, 2),
        }
    }
}

impl RateTable {
    /// Returns the base price for a zone.
    #[inline]
    #[must_use]
    pub const fn zone_rate(&self, zone: Zone) -> Decimal {
        self.zone_rates.get(zone)
    }

    /// Checks every invariant of the table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRate` naming the first offending field.
    pub fn validate(&self) -> DomainResult<()> {
        if self.currency.trim().is_empty() {
            return Err(DomainError::invalid_rate("currency", "must not be blank"));
        }
        for zone in Zone::ALL {
            require_positive(zone_field(zone), self.zone_rate(zone))?;
        }
        require_positive("per_kg_rate", self.per_kg_rate)?;
        require_positive("per_m3_rate", self.per_m3_rate)?;
        if self.express_multiplier < Decimal::ONE {
            return Err(DomainError::invalid_rate(
                "express_multiplier",
                format!("must be at least 1, got {}", self.express_multiplier),
            ));
        }
        require_non_negative("toll_flat", self.toll_flat)?;
        require_non_negative("insurance_rate", self.insurance_rate)?;
        require_non_negative("packaging_flat", self.packaging_flat)?;
        Ok(())
    }
}

fn zone_field(zone: Zone) -> &'static str {
    match zone {
        Zone::Local => "zone_rates.local",
        Zone::Regional => "zone_rates.regional",
        Zone::National => "zone_rates.national",
        Zone::International => "zone_rates.international",
    }
}

fn require_positive(field: &'static str, value: Decimal) -> DomainResult<()> {
    if value <= Decimal::ZERO {
        return Err(DomainError::invalid_rate(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: Decimal) -> DomainResult<()> {
    if value < Decimal::ZERO {
        return Err(DomainError::invalid_rate(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_table_is_valid() {
        assert!(RateTable::default().validate().is_ok());
    }

    #[test]
    fn default_constants() {
        let rates = RateTable::default();
        assert_eq!(rates.currency, "R$");
        assert_eq!(rates.zone_rate(Zone::Local), dec!(30.00));
        assert_eq!(rates.zone_rate(Zone::Regional), dec!(65.00));
        assert_eq!(rates.zone_rate(Zone::National), dec!(120.00));
        assert_eq!(rates.zone_rate(Zone::International), dec!(250.00));
        assert_eq!(rates.per_kg_rate, dec!(8.50));
        assert_eq!(rates.per_m3_rate, dec!(120.00));
        assert_eq!(rates.express_multiplier, dec!(2.5));
        assert_eq!(rates.toll_flat, dec!(27.50));
        assert_eq!(rates.insurance_rate, dec!(0.04));
        assert_eq!(rates.packaging_flat, dec!(25.00));
    }

    #[test]
    fn zone_rates_increase_with_distance() {
        let rates = RateTable::default();
        let prices: Vec<Decimal> = Zone::ALL.iter().map(|z| rates.zone_rate(*z)).collect();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_zero_zone_rate() {
        let mut rates = RateTable::default();
        rates.zone_rates.national = Decimal::ZERO;
        let err = rates.validate().unwrap_err();
        assert!(err.to_string().contains("zone_rates.national"));
    }

    #[test]
    fn rejects_express_multiplier_below_one() {
        let rates = RateTable {
            express_multiplier: dec!(0.9),
            ..RateTable::default()
        };
        let err = rates.validate().unwrap_err();
        assert!(err.to_string().contains("express_multiplier"));
    }

    #[test]
    fn rejects_negative_surcharge() {
        let rates = RateTable {
            toll_flat: dec!(-1),
            ..RateTable::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn zero_surcharges_are_allowed() {
        let rates = RateTable {
            toll_flat: Decimal::ZERO,
            insurance_rate: Decimal::ZERO,
            packaging_flat: Decimal::ZERO,
            ..RateTable::default()
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn rejects_blank_currency() {
        let rates = RateTable {
            currency: "  ".to_string(),
            ..RateTable::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn deserializes_partial_json_over_defaults() {
        let rates: RateTable =
            serde_json::from_str(r#"{"currency":"USD","toll_flat":"12.00"}"#).unwrap();
        assert_eq!(rates.currency, "USD");
        assert_eq!(rates.toll_flat, dec!(12.00));
        assert_eq!(rates.per_kg_rate, dec!(8.50));
    }
}
