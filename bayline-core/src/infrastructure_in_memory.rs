use crate::infrastructure::LeaseStore;
use crate::types::Lease;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

#[derive(Debug, Default)]
pub struct InMemoryLeaseStore {
    // Map of Client ID -> Lease
    leases: HashMap<String, Lease>,
}

impl InMemoryLeaseStore {
    pub fn new() -> Self {
        Self {
            leases: HashMap::new(),
        }
    }
}

impl LeaseStore for InMemoryLeaseStore {
    fn insert(&mut self, lease: Lease) -> bool {
        match self.leases.entry(lease.client_id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(lease);
                true
            }
        }
    }

    fn remove(&mut self, client_id: &str) -> Option<Lease> {
        self.leases.remove(client_id)
    }

    fn get(&self, client_id: &str) -> Option<&Lease> {
        self.leases.get(client_id)
    }

    fn len(&self) -> usize {
        self.leases.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Lease> + '_> {
        Box::new(self.leases.values())
    }
}
