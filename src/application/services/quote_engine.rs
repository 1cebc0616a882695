//! # Quote Engine
//!
//! Orchestrates one shipment quote.
//!
//! ```text
//! ShipmentRequest
//!   -> PricingStrategy::compute_base        (strategy chosen by the caller)
//!   -> * Carrier::price_multiplier          (carrier chosen by service level)
//!   -> SurchargeChain::apply                (requested add-ons)
//!   -> round half-up to cents
//!   -> ConfigStore::append(LogEntry)
//!   -> Quote
//! ```
//!
//! A failed call returns before the log append, so the store never records a
//! partial quote.
//!
//! # Examples
//!
//! ```
//! use freight_quote::application::services::QuoteEngine;
//! use freight_quote::domain::entities::ShipmentRequest;
//! use freight_quote::domain::value_objects::{
//!     AddOnService, PricingStrategyKind, RateTable, ServiceLevel, Zone,
//! };
//! use freight_quote::infrastructure::config_store::ConfigStore;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let store = Arc::new(ConfigStore::new(RateTable::default()).unwrap());
//! let engine = QuoteEngine::new(Arc::clone(&store));
//!
//! let request = ShipmentRequest::builder("São Paulo, SP", "Rio de Janeiro, RJ", Zone::Regional)
//!     .weight_kg(Decimal::new(10, 0))
//!     .volume_m3(Decimal::new(5, 1))
//!     .build();
//!
//! let quote = engine
//!     .quote(
//!         &request,
//!         PricingStrategyKind::ByZone,
//!         ServiceLevel::Standard,
//!         &[AddOnService::Toll, AddOnService::Insurance],
//!     )
//!     .unwrap();
//!
//! assert_eq!(quote.final_price(), Decimal::new(10634, 2));
//! assert_eq!(quote.carrier_name(), "ExpressLog Padrão");
//! assert_eq!(store.len(), 1);
//! ```

use crate::domain::entities::carrier::CarrierFactory;
use crate::domain::entities::log_entry::LogEntry;
use crate::domain::entities::quote::{PriceLine, Quote};
use crate::domain::entities::shipment::ShipmentRequest;
use crate::domain::errors::DomainResult;
use crate::domain::services::pricing::PricingStrategy;
use crate::domain::services::surcharge::SurchargeChain;
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::enums::{AddOnService, PricingStrategyKind, ServiceLevel};
use crate::infrastructure::config_store::ConfigStore;
use std::sync::Arc;

/// Computes quotes against a shared [`ConfigStore`].
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    store: Arc<ConfigStore>,
}

impl QuoteEngine {
    /// Creates an engine reading rates from and logging to `store`.
    #[must_use]
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    /// Returns the store this engine uses.
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Quotes a shipment and records it in the store's log.
    ///
    /// # Arguments
    ///
    /// * `request` - The parcel to quote
    /// * `strategy` - Algorithm for the base price
    /// * `level` - Service level, which selects the carrier
    /// * `add_ons` - Add-on services, each at most once
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidShipment` if weight or volume is not positive
    /// - `DomainError::StrategyMismatch` if `strategy` is express but the
    ///   shipment did not ask for express delivery
    /// - `DomainError::DuplicateService` if an add-on is listed twice
    /// - `DomainError::Arithmetic` on overflow
    ///
    /// On error nothing is appended to the log.
    pub fn quote(
        &self,
        request: &ShipmentRequest,
        strategy: PricingStrategyKind,
        level: ServiceLevel,
        add_ons: &[AddOnService],
    ) -> DomainResult<Quote> {
        match self.compute(request, strategy, level, add_ons) {
            Ok(quote) => {
                let sequence = self.store.append(LogEntry::for_quote(request, &quote));
                tracing::info!(
                    sequence,
                    strategy = %strategy,
                    level = %level,
                    carrier = %quote.carrier_name(),
                    price = %quote.final_price(),
                    "quote computed"
                );
                Ok(quote)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    strategy = %strategy,
                    level = %level,
                    "quote rejected"
                );
                Err(err)
            }
        }
    }

    /// Computes a quote without touching the log.
    fn compute(
        &self,
        request: &ShipmentRequest,
        strategy: PricingStrategyKind,
        level: ServiceLevel,
        add_ons: &[AddOnService],
    ) -> DomainResult<Quote> {
        let rates = self.store.rates();

        let base = strategy.compute_base(request, rates)?;
        tracing::debug!(strategy = %strategy, base = %base, "computed base price");

        let carrier = CarrierFactory::create(level);
        let adjusted = base.safe_mul(carrier.price_multiplier())?;
        tracing::debug!(
            carrier = %carrier.name(),
            multiplier = %carrier.price_multiplier(),
            adjusted = %adjusted,
            "applied carrier multiplier"
        );

        let chain = SurchargeChain::from_requested(add_ons)?;
        let outcome = chain.apply(adjusted, rates)?;

        let mut breakdown = Vec::with_capacity(2 + outcome.lines.len());
        breakdown.push(PriceLine::new(strategy.name(), base));
        breakdown.push(PriceLine::new(
            format!("Carrier {} x{}", carrier.name(), carrier.price_multiplier()),
            adjusted.safe_sub(base)?,
        ));
        breakdown.extend(outcome.lines);

        Ok(Quote::new(
            outcome.price,
            rates.currency.clone(),
            carrier,
            level,
            strategy,
            chain.services().to_vec(),
            breakdown,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::{RateTable, Zone};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn engine() -> QuoteEngine {
        QuoteEngine::new(Arc::new(ConfigStore::new(RateTable::default()).unwrap()))
    }

    fn regional(weight: Decimal, volume: Decimal, express: bool) -> ShipmentRequest {
        ShipmentRequest::builder("São Paulo, SP", "Rio de Janeiro, RJ", Zone::Regional)
            .weight_kg(weight)
            .volume_m3(volume)
            .express(express)
            .build()
    }

    #[test]
    fn worked_example() {
        let engine = engine();
        let quote = engine
            .quote(
                &regional(dec!(10), dec!(0.5), false),
                PricingStrategyKind::ByZone,
                ServiceLevel::Standard,
                &[AddOnService::Toll, AddOnService::Insurance],
            )
            .unwrap();
        assert_eq!(quote.final_price(), dec!(106.34));
        assert_eq!(quote.carrier_name(), "ExpressLog Padrão");
        assert_eq!(quote.transit_days(), 5);
        assert_eq!(
            quote.applied_services(),
            &[AddOnService::Toll, AddOnService::Insurance]
        );
    }

    #[test]
    fn breakdown_sums_to_unrounded_price() {
        let engine = engine();
        let quote = engine
            .quote(
                &regional(dec!(10), dec!(0.5), false),
                PricingStrategyKind::ByZone,
                ServiceLevel::Standard,
                &[AddOnService::Toll, AddOnService::Insurance],
            )
            .unwrap();
        let lines = quote.breakdown();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].label, "Zone rate");
        assert_eq!(lines[0].amount, dec!(65.00));
        assert_eq!(lines[1].amount, dec!(9.75));
        assert_eq!(lines[2].amount, dec!(27.50));
        assert_eq!(lines[3].amount, dec!(4.09));
        let total: Decimal = lines.iter().map(|l| l.amount).sum();
        assert_eq!(total, dec!(106.34));
    }

    #[test]
    fn economy_without_add_ons_is_base_price() {
        let engine = engine();
        let quote = engine
            .quote(
                &regional(dec!(10), dec!(0.5), false),
                PricingStrategyKind::ByWeight,
                ServiceLevel::Economy,
                &[],
            )
            .unwrap();
        assert_eq!(quote.final_price(), dec!(85.00));
        assert_eq!(quote.carrier_name(), "EcoFreight");
        assert!(quote.applied_services().is_empty());
    }

    #[test]
    fn priority_express_with_everything() {
        let engine = engine();
        let quote = engine
            .quote(
                &regional(dec!(2), dec!(0.1), true),
                PricingStrategyKind::Express,
                ServiceLevel::Priority,
                &[
                    AddOnService::Packaging,
                    AddOnService::Insurance,
                    AddOnService::Toll,
                ],
            )
            .unwrap();
        // 65 * 2.5 = 162.50; * 1.45 = 235.625; + 27.50 = 263.125;
        // * 1.04 = 273.65; + 25 = 298.65
        assert_eq!(quote.final_price(), dec!(298.65));
        assert_eq!(quote.applied_services(), &AddOnService::ALL);
    }

    #[test]
    fn final_price_is_rounded_half_up() {
        let engine = engine();
        // 0.3 kg * 8.50 = 2.55; * 1.15 = 2.9325 -> 2.93
        let quote = engine
            .quote(
                &regional(dec!(0.3), dec!(0.001), false),
                PricingStrategyKind::ByWeight,
                ServiceLevel::Standard,
                &[],
            )
            .unwrap();
        assert_eq!(quote.final_price(), dec!(2.93));
    }

    #[test]
    fn success_appends_one_log_entry() {
        let engine = engine();
        engine
            .quote(
                &regional(dec!(1), dec!(0.1), false),
                PricingStrategyKind::ByZone,
                ServiceLevel::Economy,
                &[],
            )
            .unwrap();
        assert_eq!(engine.store().len(), 1);
        assert!(engine.store().entries()[0].summary().contains("BY_ZONE"));
    }

    #[test]
    fn duplicate_add_on_fails_without_logging() {
        let engine = engine();
        let err = engine
            .quote(
                &regional(dec!(1), dec!(0.1), false),
                PricingStrategyKind::ByZone,
                ServiceLevel::Standard,
                &[AddOnService::Insurance, AddOnService::Insurance],
            )
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateService(AddOnService::Insurance));
        assert!(engine.store().is_empty());
    }

    #[test]
    fn express_mismatch_fails_without_logging() {
        let engine = engine();
        let err = engine
            .quote(
                &regional(dec!(1), dec!(0.1), false),
                PricingStrategyKind::Express,
                ServiceLevel::Priority,
                &[],
            )
            .unwrap_err();
        assert!(err.is_strategy_mismatch());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn invalid_shipment_fails_without_logging() {
        let engine = engine();
        let err = engine
            .quote(
                &regional(dec!(0), dec!(0.1), false),
                PricingStrategyKind::ByZone,
                ServiceLevel::Standard,
                &[],
            )
            .unwrap_err();
        assert!(err.is_invalid_shipment());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn uses_rates_from_its_store() {
        let rates = RateTable {
            currency: "USD".to_string(),
            toll_flat: dec!(10),
            ..RateTable::default()
        };
        let engine = QuoteEngine::new(Arc::new(ConfigStore::new(rates).unwrap()));
        let quote = engine
            .quote(
                &regional(dec!(1), dec!(0.1), false),
                PricingStrategyKind::ByZone,
                ServiceLevel::Economy,
                &[AddOnService::Toll],
            )
            .unwrap();
        assert_eq!(quote.final_price(), dec!(75.00));
        assert_eq!(quote.currency(), "USD");
    }

    #[test]
    fn strategy_can_change_per_call() {
        let engine = engine();
        let request = regional(dec!(10), dec!(2), true);
        let prices: Vec<Decimal> = PricingStrategyKind::ALL
            .iter()
            .map(|kind| {
                engine
                    .quote(&request, *kind, ServiceLevel::Economy, &[])
                    .unwrap()
                    .final_price()
            })
            .collect();
        assert_eq!(prices, vec![dec!(65.00), dec!(85.00), dec!(240.00), dec!(162.50)]);
        assert_eq!(engine.store().len(), 4);
    }
}
