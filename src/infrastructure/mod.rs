//! # Infrastructure Layer
//!
//! Process-level concerns around the pricing core.
//!
//! - [`config_store`]: Rate constants and the shared quote log
//! - [`settings`]: Layered loading of the rate table
//! - [`telemetry`]: `tracing` subscriber setup

pub mod config_store;
pub mod settings;
pub mod telemetry;

pub use config_store::ConfigStore;
pub use settings::Settings;
pub use telemetry::init_tracing;
