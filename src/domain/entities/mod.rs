//! # Domain Entities
//!
//! - [`ShipmentRequest`]: The parcel to quote
//! - [`Carrier`]: Carrier descriptor, produced by [`CarrierFactory`]
//! - [`Quote`]: Final priced result with its [`PriceLine`] breakdown
//! - [`LogEntry`]: Audit record of a successful quote

pub mod carrier;
pub mod log_entry;
pub mod quote;
pub mod shipment;

pub use carrier::{Carrier, CarrierFactory};
pub use log_entry::LogEntry;
pub use quote::{PriceLine, Quote};
pub use shipment::{ShipmentRequest, ShipmentRequestBuilder};
