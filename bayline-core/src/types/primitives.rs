use serde::{Deserialize, Serialize};

/// Identifier of a spot inside its class pool. Only unique per class.
pub type SpotId = u32;

/// Resource classes a spot pool can be keyed by.
/// Each class has its own pool of interchangeable spots and a base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceClass {
    Car,
    Bike,
    Truck,
    /// Emergency vehicles park free of charge by default
    Emergency,
    EcoFriendly,
}

impl ResourceClass {
    /// Number of classes, used to size the per-class tables
    pub const COUNT: usize = 5;

    /// All classes in index order
    pub const ALL: [ResourceClass; Self::COUNT] = [
        ResourceClass::Car,
        ResourceClass::Bike,
        ResourceClass::Truck,
        ResourceClass::Emergency,
        ResourceClass::EcoFriendly,
    ];

    /// Returns the numeric index for O(1) table lookup
    pub fn to_index(self) -> usize {
        match self {
            ResourceClass::Car => 0,
            ResourceClass::Bike => 1,
            ResourceClass::Truck => 2,
            ResourceClass::Emergency => 3,
            ResourceClass::EcoFriendly => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Character prefix used when rendering spot labels
    pub fn label_char(self) -> char {
        label_char_for_index(self.to_index())
    }
}

/// Label prefix for a raw class index; indices outside the table render as `?`.
pub fn label_char_for_index(index: usize) -> char {
    match index {
        0 => 'A',
        1 => 'B',
        2 => 'C',
        3 => 'D',
        4 => 'E',
        _ => '?',
    }
}

impl std::fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceClass::Car => write!(f, "CAR"),
            ResourceClass::Bike => write!(f, "BIKE"),
            ResourceClass::Truck => write!(f, "TRUCK"),
            ResourceClass::Emergency => write!(f, "EMERGENCY"),
            ResourceClass::EcoFriendly => write!(f, "ECO_FRIENDLY"),
        }
    }
}

/// A spot within a specific class pool, e.g. `A27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotLabel {
    pub class: ResourceClass,
    pub spot: SpotId,
}

impl SpotLabel {
    pub fn new(class: ResourceClass, spot: SpotId) -> Self {
        Self { class, spot }
    }
}

impl std::fmt::Display for SpotLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.class.label_char(), self.spot)
    }
}

/// A fixed-size table holding one value per resource class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassTable<T> {
    pub car: T,
    pub bike: T,
    pub truck: T,
    pub emergency: T,
    pub eco_friendly: T,
}

impl<T: Copy> ClassTable<T> {
    pub fn get(&self, class: ResourceClass) -> T {
        match class {
            ResourceClass::Car => self.car,
            ResourceClass::Bike => self.bike,
            ResourceClass::Truck => self.truck,
            ResourceClass::Emergency => self.emergency,
            ResourceClass::EcoFriendly => self.eco_friendly,
        }
    }

    pub fn set(&mut self, class: ResourceClass, value: T) {
        match class {
            ResourceClass::Car => self.car = value,
            ResourceClass::Bike => self.bike = value,
            ResourceClass::Truck => self.truck = value,
            ResourceClass::Emergency => self.emergency = value,
            ResourceClass::EcoFriendly => self.eco_friendly = value,
        }
    }

    /// Iterates `(class, value)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (ResourceClass, T)> + '_ {
        ResourceClass::ALL.into_iter().map(|class| (class, self.get(class)))
    }
}

/// Spot counts per class, fixed at engine construction
pub type Capacities = ClassTable<u32>;

/// Undiscounted hourly rate per class
pub type RateTable = ClassTable<f64>;

impl Default for Capacities {
    fn default() -> Self {
        Self {
            car: 27,
            bike: 12,
            truck: 4,
            emergency: 2,
            eco_friendly: 8,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            car: 50.0,
            bike: 20.0,
            truck: 80.0,
            emergency: 0.0,
            eco_friendly: 40.0,
        }
    }
}
