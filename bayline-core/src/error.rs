use thiserror::Error;

use crate::types::ResourceClass;

/// Recoverable engine failures. A failing operation leaves all state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("No parking spot available for class {class}")]
    NoCapacity { class: ResourceClass },

    #[error("Client {client_id} already holds an active lease")]
    AlreadyActive { client_id: String },

    #[error("No active lease found for client {client_id}")]
    NotFound { client_id: String },
}

/// Configuration load and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Capacity for class {class} is {count}, maximum is {max}")]
    CapacityTooLarge { class: ResourceClass, count: u32, max: u32 },

    #[error("Invalid rate for class {class}: {rate}")]
    InvalidRate { class: ResourceClass, rate: f64 },

    #[error("Discount fraction must be within [0, 1), got {0}")]
    InvalidDiscount(f64),

    #[error("Time scale must be greater than 0")]
    ZeroTimeScale,

    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
