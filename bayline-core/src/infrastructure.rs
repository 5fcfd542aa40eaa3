use crate::types::Lease;

/// Defines the contract for lease storage backends.
/// Leases are keyed by client id; a client holds at most one.
pub trait LeaseStore {
    /// Record a lease, replacing nothing. Returns false if the client already has one.
    fn insert(&mut self, lease: Lease) -> bool;

    /// Remove and return the lease held by a client
    fn remove(&mut self, client_id: &str) -> Option<Lease>;

    fn get(&self, client_id: &str) -> Option<&Lease>;

    fn contains(&self, client_id: &str) -> bool {
        self.get(client_id).is_some()
    }

    /// Number of active leases
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all active leases
    fn iter(&self) -> Box<dyn Iterator<Item = &Lease> + '_>;
}
