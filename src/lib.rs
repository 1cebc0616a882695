//! # Freight Quote
//!
//! Parcel freight quoting: a shipment is priced by a selectable base-pricing
//! strategy, adjusted by the carrier its service level maps to, and wrapped by
//! optional add-on surcharges. Every successful quote is appended to a shared,
//! mutex-guarded log.
//!
//! ## Layers
//!
//! - [`domain`]: Value objects, entities and pure pricing services
//! - [`application`]: The [`QuoteEngine`](application::services::QuoteEngine)
//!   and application errors
//! - [`infrastructure`]: The [`ConfigStore`](infrastructure::ConfigStore),
//!   settings loading and tracing setup
//!
//! ## Quick start
//!
//! ```
//! use freight_quote::application::services::QuoteEngine;
//! use freight_quote::domain::entities::ShipmentRequest;
//! use freight_quote::domain::value_objects::{
//!     AddOnService, PricingStrategyKind, RateTable, ServiceLevel, Zone,
//! };
//! use freight_quote::infrastructure::ConfigStore;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let store = Arc::new(ConfigStore::new(RateTable::default()).unwrap());
//! let engine = QuoteEngine::new(store);
//!
//! let request = ShipmentRequest::new(
//!     "Curitiba, PR",
//!     "Porto Alegre, RS",
//!     Zone::Regional,
//!     Decimal::new(10, 0),
//!     Decimal::new(5, 1),
//!     false,
//! );
//! let add_ons = [AddOnService::Toll, AddOnService::Insurance];
//! let quote = engine
//!     .quote(&request, PricingStrategyKind::ByZone, ServiceLevel::Standard, &add_ons)
//!     .unwrap();
//! assert_eq!(
//!     quote.to_string(),
//!     "R$ 106.34 via ExpressLog Padrão in 5 days [TOLL, INSURANCE]"
//! );
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
