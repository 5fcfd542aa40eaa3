use crate::error::EngineError;
use crate::types::{Capacities, ResourceClass, SpotId};

/// Per-class pools of free spots.
///
/// Each pool is a stack: the most recently freed spot is handed out first.
/// A fresh pool yields its spots in ascending order (1, 2, ...).
#[derive(Debug, Clone)]
pub struct InventoryManager {
    pools: [Vec<SpotId>; ResourceClass::COUNT],
    capacities: Capacities,
}

impl InventoryManager {
    pub fn new(capacities: &Capacities) -> Self {
        let pools = std::array::from_fn(|index| {
            let class = ResourceClass::ALL[index];
            // Top of the stack is the end of the Vec
            (1..=capacities.get(class)).rev().collect()
        });

        Self {
            pools,
            capacities: *capacities,
        }
    }

    /// Pops a free spot from the class pool.
    pub fn reserve(&mut self, class: ResourceClass) -> Result<SpotId, EngineError> {
        let spot = self.pools[class.to_index()]
            .pop()
            .ok_or(EngineError::NoCapacity { class })?;
        tracing::debug!(%class, spot, "spot reserved");
        Ok(spot)
    }

    /// Returns a spot to its class pool. The caller guarantees it was reserved.
    pub fn release(&mut self, class: ResourceClass, spot: SpotId) {
        self.pools[class.to_index()].push(spot);
        tracing::debug!(%class, spot, "spot returned");
    }

    pub fn capacity(&self) -> usize {
        self.capacities.iter().map(|(_, count)| count as usize).sum()
    }

    pub fn capacity_of(&self, class: ResourceClass) -> usize {
        self.capacities.get(class) as usize
    }

    pub fn free_count(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    pub fn free_count_of(&self, class: ResourceClass) -> usize {
        self.pools[class.to_index()].len()
    }

    /// Free spots of a class, next-to-be-reserved first
    pub fn free_spots(&self, class: ResourceClass) -> impl Iterator<Item = SpotId> + '_ {
        self.pools[class.to_index()].iter().rev().copied()
    }
}
