//! Pool of nodes not yet placed on any route.

use fixedbitset::FixedBitSet;

/// The set of unassigned non-depot nodes.
///
/// Passed by value from one route construction to the next, so exactly one
/// builder can take nodes out of it at a time. Iteration is in ascending
/// node order.
///
/// # Examples
///
/// ```
/// use u_cvrptw::constructive::UnassignedPool;
///
/// let mut pool = UnassignedPool::new(4);
/// assert_eq!(pool.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert!(pool.take(2));
/// assert!(!pool.take(2));
/// assert_eq!(pool.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignedPool {
    nodes: FixedBitSet,
}

impl UnassignedPool {
    /// Every node in `1..num_nodes`.
    pub fn new(num_nodes: usize) -> Self {
        let mut nodes = FixedBitSet::with_capacity(num_nodes);
        if num_nodes > 1 {
            nodes.insert_range(1..num_nodes);
        }
        Self { nodes }
    }

    /// Only the given nodes; the depot is never added.
    pub fn from_nodes(num_nodes: usize, members: impl IntoIterator<Item = usize>) -> Self {
        let mut nodes = FixedBitSet::with_capacity(num_nodes);
        for node in members.into_iter().filter(|&n| n != 0 && n < num_nodes) {
            nodes.insert(node);
        }
        Self { nodes }
    }

    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(node)
    }

    /// Removes `node`, returning `true` if it was unassigned.
    pub fn take(&mut self, node: usize) -> bool {
        if self.contains(node) {
            self.nodes.set(node, false);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.ones().next().is_none()
    }

    /// Unassigned nodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_excludes_depot() {
        let pool = UnassignedPool::new(5);
        assert!(!pool.contains(0));
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_depot_only_pool_is_empty() {
        assert!(UnassignedPool::new(1).is_empty());
        assert!(UnassignedPool::new(0).is_empty());
    }

    #[test]
    fn test_take_until_empty() {
        let mut pool = UnassignedPool::new(3);
        assert!(pool.take(1));
        assert!(!pool.is_empty());
        assert!(pool.take(2));
        assert!(pool.is_empty());
        assert!(!pool.take(0));
    }

    #[test]
    fn test_from_nodes_filters_depot_and_out_of_range() {
        let pool = UnassignedPool::from_nodes(4, [0, 3, 1, 9]);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
