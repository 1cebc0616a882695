//! # Carrier
//!
//! Carrier descriptors and their selection by service level.
//!
//! [`CarrierFactory::create`] is a total lookup over [`ServiceLevel`]:
//!
//! | Level    | Carrier             | Transit days | Multiplier |
//! |----------|---------------------|--------------|------------|
//! | Economy  | `EcoFreight`        | 8            | 1.00       |
//! | Standard | `ExpressLog Padrão` | 5            | 1.15       |
//! | Priority | `PriorityShip`      | 2            | 1.45       |
//!
//! A new level is added by extending the enum and this table.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::carrier::CarrierFactory;
//! use freight_quote::domain::value_objects::ServiceLevel;
//!
//! let carrier = CarrierFactory::create(ServiceLevel::Standard);
//! assert_eq!(carrier.name(), "ExpressLog Padrão");
//! assert_eq!(carrier.transit_days(), 5);
//! ```

use crate::domain::value_objects::enums::ServiceLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A carrier able to move a shipment at a given service level.
///
/// # Invariants
///
/// - `transit_days` is at least 1
/// - `price_multiplier` is at least 1.0
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Carrier {
    name: String,
    transit_days: u32,
    price_multiplier: Decimal,
}

impl Carrier {
    /// Returns the carrier name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the transit time in business days.
    #[inline]
    #[must_use]
    pub fn transit_days(&self) -> u32 {
        self.transit_days
    }

    /// Returns the factor applied to the base price.
    #[inline]
    #[must_use]
    pub fn price_multiplier(&self) -> Decimal {
        self.price_multiplier
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} days, x{})",
            self.name, self.transit_days, self.price_multiplier
        )
    }
}

/// Produces the carrier serving a service level.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarrierFactory;

impl CarrierFactory {
    /// Returns a fresh carrier for the given level.
    #[must_use]
    pub fn create(level: ServiceLevel) -> Carrier {
        let (name, transit_days, price_multiplier) = match level {
            ServiceLevel::Economy => ("EcoFreight", 8, Decimal::new(100, 2)),
            ServiceLevel::Standard => ("ExpressLog Padrão", 5, Decimal::new(115, 2)),
            ServiceLevel::Priority => ("PriorityShip", 2, Decimal::new(145, 2)),
        };
        Carrier {
            name: name.to_string(),
            transit_days,
            price_multiplier,
        }
    }
}
