#[cfg(test)]
mod tests {
    use crate::infrastructure::LeaseStore;
    use crate::infrastructure_in_memory::InMemoryLeaseStore;
    use crate::types::{Lease, ResourceClass};

    fn lease(client_id: &str, spot: u32) -> Lease {
        Lease::new(
            client_id.to_string(),
            ResourceClass::Car,
            spot,
            50.0,
            false,
            1000,
            6000,
        )
    }

    #[test]
    fn test_in_memory_store_insert_and_remove() {
        let mut store = InMemoryLeaseStore::new();
        assert!(store.is_empty());

        assert!(store.insert(lease("KA01", 1)));
        assert!(store.contains("KA01"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("KA01").map(|l| l.spot), Some(1));

        let removed = store.remove("KA01").expect("lease should exist");
        assert_eq!(removed.ttl_deadline, 6000);
        assert!(!store.contains("KA01"));
        assert!(store.remove("KA01").is_none());
    }

    #[test]
    fn test_in_memory_store_rejects_second_lease_for_client() {
        let mut store = InMemoryLeaseStore::new();
        assert!(store.insert(lease("KA01", 1)));
        assert!(!store.insert(lease("KA01", 2)));

        // original lease untouched
        assert_eq!(store.get("KA01").map(|l| l.spot), Some(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_in_memory_store_iterates_all_leases() {
        let mut store = InMemoryLeaseStore::new();
        store.insert(lease("KA01", 1));
        store.insert(lease("KA02", 2));

        let mut spots: Vec<u32> = store.iter().map(|l| l.spot).collect();
        spots.sort();
        assert_eq!(spots, vec![1, 2]);
    }
}
