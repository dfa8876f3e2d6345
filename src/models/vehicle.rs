//! Vehicle type.

use serde::{Deserialize, Serialize};

/// A vehicle that leaves the depot, serves a route and returns.
///
/// The fleet is homogeneous: every vehicle shares the same capacity.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::Vehicle;
///
/// let v = Vehicle::new(0, 100);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i64,
}

impl Vehicle {
    pub fn new(id: usize, capacity: i64) -> Self {
        Self { id, capacity }
    }

    /// Builds `count` identical vehicles numbered `0..count`.
    pub fn fleet(count: usize, capacity: i64) -> Vec<Self> {
        (0..count).map(|id| Self::new(id, capacity)).collect()
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum cumulative load.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_is_numbered_in_order() {
        let fleet = Vehicle::fleet(3, 50);
        assert_eq!(fleet.len(), 3);
        for (i, v) in fleet.iter().enumerate() {
            assert_eq!(v.id(), i);
            assert_eq!(v.capacity(), 50);
        }
    }

    #[test]
    fn test_empty_fleet() {
        assert!(Vehicle::fleet(0, 10).is_empty());
    }
}
