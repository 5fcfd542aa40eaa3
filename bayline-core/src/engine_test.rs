#[cfg(test)]
mod tests {
    use crate::clock::ManualClock;
    use crate::config::EngineConfig;
    use crate::engine::ParkingEngine;
    use crate::error::EngineError;
    use crate::types::{Capacities, ResourceClass};
    use proptest::collection::vec;
    use proptest::prelude::*;

    const HOUR_MS: u64 = 30_000;

    fn engine_with(capacities: Capacities) -> (ParkingEngine, ManualClock) {
        let clock = ManualClock::new(1_000_000);
        let config = EngineConfig {
            capacities,
            ..EngineConfig::default()
        };
        (ParkingEngine::with_clock(&config, clock.clone()), clock)
    }

    fn small_lot() -> Capacities {
        Capacities {
            car: 2,
            bike: 1,
            truck: 1,
            emergency: 1,
            eco_friendly: 1,
        }
    }

    #[test]
    fn test_lifo_reuse_across_clients() {
        let (mut engine, _) = engine_with(small_lot());

        assert_eq!(engine.allocate("A", ResourceClass::Car).unwrap().spot.spot, 1);
        assert_eq!(engine.allocate("B", ResourceClass::Car).unwrap().spot.spot, 2);
        engine.release("A").unwrap();
        engine.release("B").unwrap();

        assert_eq!(engine.allocate("C", ResourceClass::Car).unwrap().spot.spot, 2);
        assert_eq!(engine.allocate("D", ResourceClass::Car).unwrap().spot.spot, 1);
    }

    #[test]
    fn test_round_trip_restores_pool() {
        let (mut engine, clock) = engine_with(small_lot());
        let before: Vec<u32> = engine.inventory().free_spots(ResourceClass::Car).collect();

        engine.allocate("KA01", ResourceClass::Car).unwrap();
        clock.advance(HOUR_MS);
        engine.release("KA01").unwrap();

        let after: Vec<u32> = engine.inventory().free_spots(ResourceClass::Car).collect();
        assert_eq!(before, after);
        assert_eq!(engine.occupancy().occupied, 0);
    }

    #[test]
    fn test_no_capacity_leaves_state_unchanged() {
        let (mut engine, _) = engine_with(small_lot());
        engine.allocate("T1", ResourceClass::Truck).unwrap();

        let err = engine.allocate("T2", ResourceClass::Truck).unwrap_err();
        assert_eq!(err, EngineError::NoCapacity { class: ResourceClass::Truck });
        assert!(engine.lease("T2").is_none());
        assert_eq!(engine.occupancy().occupied, 1);
    }

    #[test]
    fn test_immediate_release_is_not_overstayed() {
        let (mut engine, _) = engine_with(small_lot());
        engine.allocate("KA01", ResourceClass::EcoFriendly).unwrap();
        let summary = engine.release("KA01").unwrap();
        assert!(!summary.overstayed);
        assert_eq!(summary.freed_spot.to_string(), "E1");
    }

    #[test]
    fn test_enrollment_discounts_next_lease() {
        let (mut engine, clock) = engine_with(small_lot());

        let receipt = engine.allocate("KA01", ResourceClass::Car).unwrap();
        assert_eq!(receipt.rate, 50.0);
        clock.advance(HOUR_MS / 100);
        let summary = engine.release("KA01").unwrap();
        assert_eq!(summary.charge, 50);
        assert!(summary.offer_enrollment);

        assert!(engine.enroll("KA01"));
        assert!(!engine.enroll("KA01"));
        assert!(engine.is_member("KA01"));
        assert_eq!(engine.member_count(), 1);

        let receipt = engine.allocate("KA01", ResourceClass::Car).unwrap();
        assert_eq!(receipt.rate, 40.0);
        assert!(receipt.discount_applied);
    }

    #[test]
    fn test_emergency_member_pays_nothing() {
        let (mut engine, clock) = engine_with(small_lot());
        engine.enroll("AMB1");
        let receipt = engine.allocate("AMB1", ResourceClass::Emergency).unwrap();
        assert_eq!(receipt.rate, 0.0);
        assert!(!receipt.discount_applied);
        assert_eq!(receipt.spot.to_string(), "D1");

        clock.advance(5 * HOUR_MS);
        assert_eq!(engine.release("AMB1").unwrap().charge, 0);
    }

    #[test]
    fn test_snapshot_tracks_clock() {
        let (mut engine, clock) = engine_with(small_lot());
        engine.allocate("KA01", ResourceClass::Bike).unwrap();

        assert!(engine.snapshot().iter().all(|row| !row.overstayed));
        clock.advance(48 * HOUR_MS + 1);
        let rows: Vec<_> = engine.snapshot().iter().collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].overstayed);
        assert_eq!(rows[0].spot.to_string(), "B1");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Allocate(usize, ResourceClass),
        Release(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..6usize, 0..ResourceClass::COUNT).prop_map(|(client, class)| {
                Op::Allocate(client, ResourceClass::ALL[class])
            }),
            (0..6usize).prop_map(Op::Release),
        ]
    }

    proptest! {
        #[test]
        fn prop_occupied_matches_free_pools(ops in vec(op_strategy(), 0..64)) {
            let (mut engine, clock) = engine_with(small_lot());
            let capacity = engine.occupancy().capacity;

            for op in ops {
                clock.advance(1_000);
                let free_before = engine.occupancy().free;
                match op {
                    Op::Allocate(client, class) => {
                        let id = format!("client-{client}");
                        if engine.allocate(&id, class).is_err() {
                            prop_assert_eq!(engine.occupancy().free, free_before);
                        }
                    }
                    Op::Release(client) => {
                        let id = format!("client-{client}");
                        if engine.release(&id).is_err() {
                            prop_assert_eq!(engine.occupancy().free, free_before);
                        }
                    }
                }

                let occupancy = engine.occupancy();
                prop_assert_eq!(occupancy.occupied, engine.snapshot().len());
                prop_assert_eq!(occupancy.occupied, capacity - occupancy.free);
            }
        }
    }
}
