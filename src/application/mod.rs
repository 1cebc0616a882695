//! # Application Layer
//!
//! Use cases built on the domain layer, plus the errors raised while wiring
//! the engine into a process.

pub mod error;
pub mod services;
