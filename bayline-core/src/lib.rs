//! # bayline-core
//!
//! Allocation and billing kernel for typed parking-spot inventories.
//! Provides LIFO spot reuse per resource class, TTL-bounded leases keyed
//! by client, loyalty discounts and rounded-up hourly billing.

pub mod billing;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod infrastructure;
#[path = "infrastructure_in_memory.rs"]
pub mod infrastructure_in_memory;
pub mod inventory;
pub mod loyalty;
pub mod registry;
pub mod types;

pub use engine::ParkingEngine;
pub use error::{ConfigError, EngineError};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod engine_test;
#[cfg(test)]
#[path = "infrastructure_test.rs"]
mod infrastructure_test;
