use serde::{Deserialize, Serialize};

use crate::billing::BillingCalculator;

use super::{ResourceClass, SpotId, SpotLabel};

/// An active occupancy record binding one client to one spot.
/// Financial terms are fixed when the lease is issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    /// Client holding the lease (plate number)
    pub client_id: String,
    /// Class of the occupied spot
    pub class: ResourceClass,
    /// Spot identifier within the class pool
    pub spot: SpotId,
    /// When the lease was issued (ms since epoch)
    pub entry_time: u64,
    /// When the lease becomes overstayed (entry_time + ttl)
    pub ttl_deadline: u64,
    /// Effective hourly rate, discount included
    pub rate_per_hour: f64,
    /// Whether the loyalty discount was applied to the rate
    pub discount_applied: bool,
}

impl Lease {
    pub fn new(
        client_id: String,
        class: ResourceClass,
        spot: SpotId,
        rate_per_hour: f64,
        discount_applied: bool,
        now: u64,
        ttl_deadline: u64,
    ) -> Self {
        Self {
            client_id,
            class,
            spot,
            entry_time: now,
            ttl_deadline,
            rate_per_hour,
            discount_applied,
        }
    }

    pub fn label(&self) -> SpotLabel {
        SpotLabel::new(self.class, self.spot)
    }

    pub fn is_overstayed(&self, now: u64) -> bool {
        BillingCalculator::is_overstayed(now, self.ttl_deadline)
    }
}

/// Returned by a successful allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReceipt {
    pub client_id: String,
    pub spot: SpotLabel,
    pub rate: f64,
    pub discount_applied: bool,
    pub ttl_deadline: u64,
}

/// Billing outcome of a release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub client_id: String,
    /// Elapsed scaled hours, unrounded
    pub hours_stayed: f64,
    /// Final charge, rounded up to a whole amount
    pub charge: u64,
    pub overstayed: bool,
    pub freed_spot: SpotLabel,
    /// True when the client is not yet a loyalty member
    pub offer_enrollment: bool,
}

/// One row of a status snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseStatus {
    pub client_id: String,
    pub rate: f64,
    pub spot: SpotLabel,
    pub overstayed: bool,
}

/// Aggregate inventory usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub occupied: usize,
    pub capacity: usize,
    pub free: usize,
}
