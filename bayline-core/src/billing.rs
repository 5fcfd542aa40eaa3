use crate::config::EngineConfig;
use crate::types::{RateTable, ResourceClass};

/// Rate a lease is issued at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedRate {
    pub rate: f64,
    pub discount_applied: bool,
}

/// Converts elapsed time into charges.
///
/// Time is billed in whole scaled hours, and the resulting amount is rounded
/// up again to a whole currency unit.
#[derive(Debug, Clone)]
pub struct BillingCalculator {
    rates: RateTable,
    discount_fraction: f64,
    time_scale_ms: u64,
    ttl_ms: u64,
}

impl BillingCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            rates: config.rates,
            discount_fraction: config.discount_fraction,
            time_scale_ms: config.time_scale_ms().max(1),
            ttl_ms: config.ttl_ms(),
        }
    }

    pub fn base_rate(&self, class: ResourceClass) -> f64 {
        self.rates.get(class)
    }

    pub fn discount_fraction(&self) -> f64 {
        self.discount_fraction
    }

    /// A zero base rate is never reported as discounted.
    pub fn effective_rate(&self, class: ResourceClass, is_member: bool) -> AppliedRate {
        let base = self.base_rate(class);
        if is_member && base > 0.0 {
            AppliedRate {
                rate: base * (1.0 - self.discount_fraction),
                discount_applied: true,
            }
        } else {
            AppliedRate {
                rate: base,
                discount_applied: false,
            }
        }
    }

    /// Elapsed scaled hours between entry and now, unrounded
    pub fn hours_elapsed(&self, entry_time: u64, now: u64) -> f64 {
        now.saturating_sub(entry_time) as f64 / self.time_scale_ms as f64
    }

    /// `ceil(ceil(hours) * rate)`
    pub fn charge(&self, entry_time: u64, now: u64, rate_per_hour: f64) -> u64 {
        let billed_hours = self.hours_elapsed(entry_time, now).ceil();
        (billed_hours * rate_per_hour).ceil() as u64
    }

    pub fn ttl_deadline(&self, entry_time: u64) -> u64 {
        entry_time.saturating_add(self.ttl_ms)
    }

    pub fn is_overstayed(now: u64, ttl_deadline: u64) -> bool {
        now > ttl_deadline
    }
}
