use crate::error::ConfigError;
use crate::types::{Capacities, RateTable, ResourceClass};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on spots in a single class pool
pub const MAX_SPOTS_PER_CLASS: u32 = 100_000;

/// Engine settings. Missing fields in a JSON document take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Spots per class, fixed for the engine lifetime
    pub capacities: Capacities,
    /// Base hourly rate per class
    pub rates: RateTable,
    /// Rate reduction for loyalty members, in [0, 1)
    pub discount_fraction: f64,
    /// Wall-clock seconds that count as one billed hour
    pub time_scale_secs: u64,
    /// Scaled hours a lease may run before it is flagged overstayed
    pub ttl_hours: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacities: Capacities::default(),
            rates: RateTable::default(),
            discount_fraction: 0.20,
            time_scale_secs: 30,
            // two days
            ttl_hours: 48,
        }
    }
}

impl EngineConfig {
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (class, count) in self.capacities.iter() {
            if count > MAX_SPOTS_PER_CLASS {
                return Err(ConfigError::CapacityTooLarge {
                    class,
                    count,
                    max: MAX_SPOTS_PER_CLASS,
                });
            }
        }
        for class in ResourceClass::ALL {
            let rate = self.rates.get(class);
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidRate { class, rate });
            }
        }
        if !(0.0..1.0).contains(&self.discount_fraction) {
            return Err(ConfigError::InvalidDiscount(self.discount_fraction));
        }
        if self.time_scale_secs == 0 {
            return Err(ConfigError::ZeroTimeScale);
        }
        Ok(())
    }

    /// Length of one billed hour in milliseconds
    pub fn time_scale_ms(&self) -> u64 {
        self.time_scale_secs.saturating_mul(1000)
    }

    /// Lease TTL in milliseconds
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_hours.saturating_mul(self.time_scale_ms())
    }
}
