//! # Application Services
//!
//! Orchestration over the domain services and the shared store.
//!
//! - [`QuoteEngine`]: Prices a shipment and records the result

pub mod quote_engine;

pub use quote_engine::QuoteEngine;
