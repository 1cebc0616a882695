//! # Domain Layer
//!
//! Entities, value objects and pure pricing services. Nothing in this layer
//! holds shared state or performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
