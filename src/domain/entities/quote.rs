//! # Quote Entity
//!
//! The priced result returned for one shipment request.
//!
//! A [`Quote`] is produced once per successful engine call and never
//! mutated afterwards. It holds no identifier or clock reading, so identical
//! inputs always produce equal quotes; identity and time live on the
//! [`LogEntry`](crate::domain::entities::log_entry::LogEntry) that records it.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::carrier::CarrierFactory;
//! use freight_quote::domain::entities::quote::{PriceLine, Quote};
//! use freight_quote::domain::value_objects::{PricingStrategyKind, ServiceLevel};
//! use rust_decimal::Decimal;
//!
//! let quote = Quote::new(
//!     Decimal::new(7475, 2),
//!     "R$",
//!     CarrierFactory::create(ServiceLevel::Standard),
//!     ServiceLevel::Standard,
//!     PricingStrategyKind::ByZone,
//!     Vec::new(),
//!     vec![PriceLine::new("Zone rate", Decimal::new(6500, 2))],
//! );
//!
//! assert_eq!(quote.to_string(), "R$ 74.75 via ExpressLog Padrão in 5 days");
//! ```

use crate::domain::entities::carrier::Carrier;
use crate::domain::entities::shipment::ShipmentRequest;
use crate::domain::value_objects::arithmetic::round_currency;
use crate::domain::value_objects::enums::{AddOnService, PricingStrategyKind, ServiceLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// One step of the price composition.
///
/// `amount` is the exact contribution of the step before final rounding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceLine {
    /// What the step was.
    pub label: String,
    /// The step's contribution.
    pub amount: Decimal,
}

impl PriceLine {
    /// Creates a price line.
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Final quote for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Price rounded to cents.
    final_price: Decimal,
    /// Currency symbol.
    currency: String,
    /// Carrier chosen by service level.
    carrier: Carrier,
    /// Requested service level.
    service_level: ServiceLevel,
    /// Strategy that computed the base price.
    strategy: PricingStrategyKind,
    /// Add-ons in the order they were applied.
    applied_services: Vec<AddOnService>,
    /// Step-by-step composition of the price.
    breakdown: Vec<PriceLine>,
}

impl Quote {
    /// Creates a quote. `final_price` is rounded to cents here.
    #[must_use]
    pub fn new(
        final_price: Decimal,
        currency: impl Into<String>,
        carrier: Carrier,
        service_level: ServiceLevel,
        strategy: PricingStrategyKind,
        applied_services: Vec<AddOnService>,
        breakdown: Vec<PriceLine>,
    ) -> Self {
        Self {
            final_price: round_currency(final_price),
            currency: currency.into(),
            carrier,
            service_level,
            strategy,
            applied_services,
            breakdown,
        }
    }

    /// Returns the final price, rounded to cents.
    #[inline]
    #[must_use]
    pub fn final_price(&self) -> Decimal {
        self.final_price
    }

    /// Returns the currency symbol.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the carrier.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    /// Returns the carrier name.
    #[inline]
    #[must_use]
    pub fn carrier_name(&self) -> &str {
        self.carrier.name()
    }

    /// Returns the transit time in business days.
    #[inline]
    #[must_use]
    pub fn transit_days(&self) -> u32 {
        self.carrier.transit_days()
    }

    /// Returns the requested service level.
    #[inline]
    #[must_use]
    pub fn service_level(&self) -> ServiceLevel {
        self.service_level
    }

    /// Returns the pricing strategy used.
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> PricingStrategyKind {
        self.strategy
    }

    /// Returns the add-ons in application order.
    #[inline]
    #[must_use]
    pub fn applied_services(&self) -> &[AddOnService] {
        &self.applied_services
    }

    /// Returns the price breakdown.
    #[inline]
    #[must_use]
    pub fn breakdown(&self) -> &[PriceLine] {
        &self.breakdown
    }

    /// Renders a multi-line quote card for the given shipment.
    ///
    /// Pure formatting; the caller decides where the text goes.
    #[must_use]
    pub fn render(&self, request: &ShipmentRequest) -> String {
        let rule = "-".repeat(60);
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, " SHIPPING QUOTE");
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, " Origin:      {}", request.origin());
        let _ = writeln!(out, " Destination: {}", request.destination());
        let _ = writeln!(out, " Zone:        {}", request.zone());
        let _ = writeln!(out, " Weight:      {} kg", request.weight_kg());
        let _ = writeln!(out, " Volume:      {} m3", request.volume_m3());
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, " Carrier:     {}", self.carrier_name());
        let _ = writeln!(out, " Transit:     {} business days", self.transit_days());
        let _ = writeln!(out, " Price:       {} {:.2}", self.currency, self.final_price);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, " Breakdown:");
        for line in &self.breakdown {
            let _ = writeln!(
                out,
                "   {:<32} {} {:.2}",
                line.label,
                self.currency,
                round_currency(line.amount)
            );
        }
        let _ = write!(out, "{}", "=".repeat(60));
        out
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.2} via {} in {} days",
            self.currency,
            self.final_price,
            self.carrier_name(),
            self.transit_days()
        )?;
        if !self.applied_services.is_empty() {
            let services: Vec<String> = self
                .applied_services
                .iter()
                .map(ToString::to_string)
                .collect();
            write!(f, " [{}]", services.join(", "))?;
        }
        Ok(())
    }
}
