use std::{cmp::Ordering, fmt};

/// The ratio of occupied slots to total slots, kept as an exact fraction.
///
/// Comparisons are performed by cross multiplication, so `LoadFactor::new(2, 7)` compares equal to
/// `LoadFactor::new(4, 14)` and no rounding takes place until [`LoadFactor::to_f64`] is called.
#[derive(Clone, Copy, Debug)]
pub struct LoadFactor {
    occupied: usize,
    capacity: usize,
}

impl LoadFactor {
    /// Returns the load factor `occupied / capacity`.
    ///
    /// Panics when `capacity` is zero.
    pub fn new(occupied: usize, capacity: usize) -> Self {
        assert!(capacity > 0, "load factor of a table without slots");
        LoadFactor { occupied, capacity }
    }
    /// Number of occupied slots.
    pub fn occupied(self) -> usize {
        self.occupied
    }
    /// Total number of slots.
    pub fn capacity(self) -> usize {
        self.capacity
    }
    /// Returns `true` when strictly more than half of the slots are occupied.
    pub fn exceeds_half(self) -> bool {
        self.occupied as u128 * 2 > self.capacity as u128
    }
    /// Returns the nearest `f64` to the exact ratio.
    pub fn to_f64(self) -> f64 {
        self.occupied as f64 / self.capacity as f64
    }
    fn cross(self, other: Self) -> (u128, u128) {
        (
            self.occupied as u128 * other.capacity as u128,
            other.occupied as u128 * self.capacity as u128,
        )
    }
}

impl PartialEq for LoadFactor {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(*other);
        lhs == rhs
    }
}

impl Eq for LoadFactor {}

impl PartialOrd for LoadFactor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LoadFactor {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross(*other);
        lhs.cmp(&rhs)
    }
}

impl From<LoadFactor> for f64 {
    fn from(load_factor: LoadFactor) -> f64 {
        load_factor.to_f64()
    }
}

impl fmt::Display for LoadFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.occupied, self.capacity)
    }
}
