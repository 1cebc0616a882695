//! # Shipment Request
//!
//! The parcel a caller wants quoted.
//!
//! A [`ShipmentRequest`] is immutable once constructed. Construction does
//! not reject bad dimensions: the pricing strategies do, so a quote for a
//! zero-weight parcel fails with `DomainError::InvalidShipment` at the point
//! the price would be computed.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::shipment::ShipmentRequest;
//! use freight_quote::domain::value_objects::Zone;
//! use rust_decimal::Decimal;
//!
//! let request = ShipmentRequest::builder("São Paulo, SP", "Rio de Janeiro, RJ", Zone::Regional)
//!     .weight_kg(Decimal::new(10, 0))
//!     .volume_m3(Decimal::new(5, 1))
//!     .build();
//!
//! assert!(request.validate_dimensions().is_ok());
//! assert!(!request.express_requested());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::Zone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parcel to be quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipmentRequest {
    origin: String,
    destination: String,
    zone: Zone,
    weight_kg: Decimal,
    volume_m3: Decimal,
    express_requested: bool,
}

impl ShipmentRequest {
    /// Creates a new shipment request.
    #[must_use]
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        zone: Zone,
        weight_kg: Decimal,
        volume_m3: Decimal,
        express_requested: bool,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            zone,
            weight_kg,
            volume_m3,
            express_requested,
        }
    }

    /// Starts a builder with zero dimensions and no express delivery.
    #[must_use]
    pub fn builder(
        origin: impl Into<String>,
        destination: impl Into<String>,
        zone: Zone,
    ) -> ShipmentRequestBuilder {
        ShipmentRequestBuilder::new(origin, destination, zone)
    }

    /// Returns the origin.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the zone.
    #[inline]
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Returns the weight in kilograms.
    #[inline]
    #[must_use]
    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// Returns the volume in cubic metres.
    #[inline]
    #[must_use]
    pub fn volume_m3(&self) -> Decimal {
        self.volume_m3
    }

    /// Returns true if the caller asked for express delivery.
    #[inline]
    #[must_use]
    pub fn express_requested(&self) -> bool {
        self.express_requested
    }

    /// Checks that weight and volume are strictly positive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidShipment` if either dimension is zero or
    /// negative.
    pub fn validate_dimensions(&self) -> DomainResult<()> {
        if self.weight_kg <= Decimal::ZERO {
            return Err(DomainError::invalid_shipment(format!(
                "weight must be positive, got {} kg",
                self.weight_kg
            )));
        }
        if self.volume_m3 <= Decimal::ZERO {
            return Err(DomainError::invalid_shipment(format!(
                "volume must be positive, got {} m3",
                self.volume_m3
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ShipmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {} kg, {} m3{})",
            self.origin,
            self.destination,
            self.zone,
            self.weight_kg,
            self.volume_m3,
            if self.express_requested {
                ", express"
            } else {
                ""
            }
        )
    }
}

/// Builder for [`ShipmentRequest`].
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless .build() is called"]
pub struct ShipmentRequestBuilder {
    request: ShipmentRequest,
}

impl ShipmentRequestBuilder {
    /// Creates a builder with zero dimensions and no express delivery.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, zone: Zone) -> Self {
        Self {
            request: ShipmentRequest::new(
                origin,
                destination,
                zone,
                Decimal::ZERO,
                Decimal::ZERO,
                false,
            ),
        }
    }

    /// Sets the weight in kilograms.
    pub fn weight_kg(mut self, weight_kg: Decimal) -> Self {
        self.request.weight_kg = weight_kg;
        self
    }

    /// Sets the volume in cubic metres.
    pub fn volume_m3(mut self, volume_m3: Decimal) -> Self {
        self.request.volume_m3 = volume_m3;
        self
    }

    /// Marks the shipment as express.
    pub fn express(mut self, express_requested: bool) -> Self {
        self.request.express_requested = express_requested;
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> ShipmentRequest {
        self.request
    }
}
