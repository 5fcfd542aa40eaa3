use crate::billing::BillingCalculator;
use crate::error::EngineError;
use crate::infrastructure::LeaseStore;
use crate::infrastructure_in_memory::InMemoryLeaseStore;
use crate::inventory::InventoryManager;
use crate::loyalty::LoyaltyRegistry;
use crate::types::{AllocationReceipt, Lease, LeaseStatus, ReleaseSummary, ResourceClass};

/// Tracks active leases. Per client: Absent -> Active -> Absent.
///
/// The registry owns the lease records; inventory, billing and loyalty
/// state are borrowed from the engine for each operation.
pub struct LeaseRegistry {
    store: Box<dyn LeaseStore + Send>,
    occupied: usize,
}

impl LeaseRegistry {
    pub fn new() -> Self {
        Self {
            store: Box::new(InMemoryLeaseStore::new()),
            occupied: 0,
        }
    }

    pub fn allocate(
        &mut self,
        client_id: &str,
        class: ResourceClass,
        inventory: &mut InventoryManager,
        billing: &BillingCalculator,
        loyalty: &LoyaltyRegistry,
        now: u64,
    ) -> Result<AllocationReceipt, EngineError> {
        if self.store.contains(client_id) {
            return Err(EngineError::AlreadyActive {
                client_id: client_id.to_string(),
            });
        }

        let spot = inventory.reserve(class)?;
        let applied = billing.effective_rate(class, loyalty.is_member(client_id));
        let lease = Lease::new(
            client_id.to_string(),
            class,
            spot,
            applied.rate,
            applied.discount_applied,
            now,
            billing.ttl_deadline(now),
        );
        let receipt = AllocationReceipt {
            client_id: lease.client_id.clone(),
            spot: lease.label(),
            rate: lease.rate_per_hour,
            discount_applied: lease.discount_applied,
            ttl_deadline: lease.ttl_deadline,
        };

        if !self.store.insert(lease) {
            inventory.release(class, spot);
            return Err(EngineError::AlreadyActive {
                client_id: client_id.to_string(),
            });
        }
        self.occupied += 1;
        debug_assert_eq!(self.occupied, self.store.len());

        tracing::info!(
            client_id,
            %class,
            spot = %receipt.spot,
            rate = receipt.rate,
            discount_applied = receipt.discount_applied,
            "lease allocated"
        );
        Ok(receipt)
    }

    pub fn release(
        &mut self,
        client_id: &str,
        inventory: &mut InventoryManager,
        billing: &BillingCalculator,
        loyalty: &LoyaltyRegistry,
        now: u64,
    ) -> Result<ReleaseSummary, EngineError> {
        let lease = self
            .store
            .remove(client_id)
            .ok_or_else(|| EngineError::NotFound {
                client_id: client_id.to_string(),
            })?;

        let hours_stayed = billing.hours_elapsed(lease.entry_time, now);
        let charge = billing.charge(lease.entry_time, now, lease.rate_per_hour);
        let overstayed = lease.is_overstayed(now);

        inventory.release(lease.class, lease.spot);
        self.occupied -= 1;
        debug_assert_eq!(self.occupied, self.store.len());

        let freed_spot = lease.label();
        let summary = ReleaseSummary {
            client_id: lease.client_id,
            hours_stayed,
            charge,
            overstayed,
            freed_spot,
            offer_enrollment: !loyalty.is_member(client_id),
        };

        if overstayed {
            tracing::warn!(
                client_id,
                deadline = lease.ttl_deadline,
                now,
                "lease overstayed TTL"
            );
        }
        tracing::info!(
            client_id,
            spot = %summary.freed_spot,
            hours = summary.hours_stayed,
            charge = summary.charge,
            "lease released"
        );
        Ok(summary)
    }

    pub fn get(&self, client_id: &str) -> Option<&Lease> {
        self.store.get(client_id)
    }

    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Status view of all active leases, evaluated against `now`.
    pub fn snapshot(&self, now: u64) -> Snapshot<'_> {
        Snapshot {
            store: &*self.store,
            now,
        }
    }
}

impl Default for LeaseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A borrowed view of the active leases at a fixed instant.
///
/// Rows are produced lazily; `iter` may be called any number of times.
pub struct Snapshot<'a> {
    store: &'a (dyn LeaseStore + Send),
    now: u64,
}

impl<'a> Snapshot<'a> {
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = LeaseStatus> + 'a> {
        let now = self.now;
        let store: &'a (dyn LeaseStore + Send) = self.store;
        Box::new(store.iter().map(move |lease| LeaseStatus {
            client_id: lease.client_id.clone(),
            rate: lease.rate_per_hour,
            spot: lease.label(),
            overstayed: lease.is_overstayed(now),
        }))
    }
}

impl<'a> IntoIterator for &Snapshot<'a> {
    type Item = LeaseStatus;
    type IntoIter = Box<dyn Iterator<Item = LeaseStatus> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
