//! The allocation and billing engine facade.
//! The CLI collaborator talks to the kernel exclusively through this type.

use crate::billing::BillingCalculator;
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::inventory::InventoryManager;
use crate::loyalty::LoyaltyRegistry;
use crate::registry::{LeaseRegistry, Snapshot};
use crate::types::*;

/// Owns the inventory, lease registry, loyalty registry and billing rules
/// for one parking lot.
pub struct ParkingEngine {
    inventory: InventoryManager,
    leases: LeaseRegistry,
    loyalty: LoyaltyRegistry,
    billing: BillingCalculator,
    clock: Box<dyn Clock + Send>,
}

impl ParkingEngine {
    /// Create an engine reading the system wall clock.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &EngineConfig, clock: impl Clock + Send + 'static) -> Self {
        let engine = Self {
            inventory: InventoryManager::new(&config.capacities),
            leases: LeaseRegistry::new(),
            loyalty: LoyaltyRegistry::new(),
            billing: BillingCalculator::new(config),
            clock: Box::new(clock),
        };
        tracing::debug!(capacity = engine.inventory.capacity(), "engine initialized");
        engine
    }

    /// Reserve a spot of `class` for `client_id` and issue a lease.
    pub fn allocate(
        &mut self,
        client_id: &str,
        class: ResourceClass,
    ) -> Result<AllocationReceipt, EngineError> {
        let now = self.clock.now_ms();
        self.leases
            .allocate(
                client_id,
                class,
                &mut self.inventory,
                &self.billing,
                &self.loyalty,
                now,
            )
            .inspect_err(|err| tracing::warn!(client_id, %class, %err, "allocation rejected"))
    }

    /// End the client's lease, bill it and free the spot.
    pub fn release(&mut self, client_id: &str) -> Result<ReleaseSummary, EngineError> {
        let now = self.clock.now_ms();
        self.leases
            .release(
                client_id,
                &mut self.inventory,
                &self.billing,
                &self.loyalty,
                now,
            )
            .inspect_err(|err| tracing::warn!(client_id, %err, "release rejected"))
    }

    /// Active leases with overstay evaluated at the time of the call.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.leases.snapshot(self.clock.now_ms())
    }

    pub fn is_member(&self, client_id: &str) -> bool {
        self.loyalty.is_member(client_id)
    }

    /// Idempotent. Returns true if the client was newly enrolled.
    pub fn enroll(&mut self, client_id: &str) -> bool {
        let enrolled = self.loyalty.enroll(client_id);
        if enrolled {
            tracing::info!(client_id, "loyalty membership registered");
        }
        enrolled
    }

    pub fn lease(&self, client_id: &str) -> Option<&Lease> {
        self.leases.get(client_id)
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            occupied: self.leases.occupied(),
            capacity: self.inventory.capacity(),
            free: self.inventory.free_count(),
        }
    }

    pub fn inventory(&self) -> &InventoryManager {
        &self.inventory
    }

    pub fn member_count(&self) -> usize {
        self.loyalty.len()
    }

    pub fn discount_fraction(&self) -> f64 {
        self.billing.discount_fraction()
    }
}

impl Default for ParkingEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
