//! # Add-on Surcharges
//!
//! Layered surcharges applied on top of the carrier-adjusted price.
//!
//! Each [`AddOnService`] is a [`ServiceDecorator`]: it takes the running
//! price and returns the running price plus its surcharge. A
//! [`SurchargeChain`] composes the requested add-ons, each wrapping the
//! output of the previous one:
//!
//! ```text
//! Toll      running + toll_flat
//! Insurance running + running * insurance_rate
//! Packaging running + packaging_flat
//! ```
//!
//! The chain rejects a request that names the same add-on twice and applies
//! the rest in canonical order (Toll, Insurance, Packaging), so the final
//! price does not depend on how the caller listed them.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::services::surcharge::SurchargeChain;
//! use freight_quote::domain::value_objects::{AddOnService, RateTable};
//! use rust_decimal::Decimal;
//!
//! let chain = SurchargeChain::from_requested(&[AddOnService::Insurance, AddOnService::Toll]).unwrap();
//! assert_eq!(chain.services(), &[AddOnService::Toll, AddOnService::Insurance]);
//!
//! let outcome = chain.apply(Decimal::new(7475, 2), &RateTable::default()).unwrap();
//! assert_eq!(outcome.price, Decimal::new(10634, 2));
//! ```

use crate::domain::entities::quote::PriceLine;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::enums::AddOnService;
use crate::domain::value_objects::rate_table::RateTable;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Wraps a running price with one surcharge.
pub trait ServiceDecorator {
    /// Returns the amount this service adds to `running`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    fn surcharge(&self, running: Decimal, rates: &RateTable) -> DomainResult<Decimal>;

    /// Returns `running` plus the surcharge.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    fn apply(&self, running: Decimal, rates: &RateTable) -> DomainResult<Decimal> {
        Ok(running.safe_add(self.surcharge(running, rates)?)?)
    }

    /// Returns the breakdown label for this surcharge.
    fn describe(&self, rates: &RateTable) -> String;
}

impl ServiceDecorator for AddOnService {
    fn surcharge(&self, running: Decimal, rates: &RateTable) -> DomainResult<Decimal> {
        match self {
            Self::Toll => Ok(rates.toll_flat),
            Self::Insurance => Ok(running.safe_mul(rates.insurance_rate)?),
            Self::Packaging => Ok(rates.packaging_flat),
        }
    }

    fn describe(&self, rates: &RateTable) -> String {
        match self {
            Self::Toll => "Toll".to_string(),
            Self::Insurance => match rates.insurance_rate.checked_mul(Decimal::ONE_HUNDRED) {
                Some(pct) => format!("Insurance {}%", pct.normalize()),
                None => format!("Insurance x{}", rates.insurance_rate),
            },
            Self::Packaging => "Reinforced packaging".to_string(),
        }
    }
}

/// Result of running a price through a [`SurchargeChain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    /// Price after every surcharge, unrounded.
    pub price: Decimal,
    /// One line per applied surcharge, in application order.
    pub lines: Vec<PriceLine>,
}

/// A validated, ordered set of add-on services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurchargeChain {
    services: Vec<AddOnService>,
}

impl SurchargeChain {
    /// Builds a chain from the caller's list of add-ons.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateService` naming the first add-on that
    /// appears more than once, in caller order.
    pub fn from_requested(requested: &[AddOnService]) -> DomainResult<Self> {
        let mut seen = BTreeSet::new();
        for service in requested {
            if !seen.insert(*service) {
                return Err(DomainError::DuplicateService(*service));
            }
        }
        Ok(Self {
            services: seen.into_iter().collect(),
        })
    }

    /// Returns the add-ons in application order.
    #[inline]
    #[must_use]
    pub fn services(&self) -> &[AddOnService] {
        &self.services
    }

    /// Returns true if no add-on was requested.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Applies every surcharge in order, starting from `price`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    pub fn apply(&self, price: Decimal, rates: &RateTable) -> DomainResult<ChainOutcome> {
        let mut running = price;
        let mut lines = Vec::with_capacity(self.services.len());
        for service in &self.services {
            let amount = service.surcharge(running, rates)?;
            running = running.safe_add(amount)?;
            tracing::debug!(
                service = %service,
                amount = %amount,
                running = %running,
                "applied add-on surcharge"
            );
            lines.push(PriceLine::new(service.describe(rates), amount));
        }
        Ok(ChainOutcome {
            price: running,
            lines,
        })
    }
}
