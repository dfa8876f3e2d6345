//! Generic cumulative dimension.

use std::fmt::Debug;
use std::ops::{Add, Sub};

use crate::cost::CostModel;

/// Scalar type a dimension accumulates. Implemented for `i64` and `f64`.
pub trait Cumul: Copy + PartialOrd + Default + Debug + Add<Output = Self> + Sub<Output = Self> {}

impl<T> Cumul for T where
    T: Copy + PartialOrd + Default + Debug + Add<Output = T> + Sub<Output = T>
{
}

fn max_of<T: Cumul>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

fn min_of<T: Cumul>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Inclusive range a cumulative value must lie in at a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: Cumul> Bounds<T> {
    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Transit evaluator: the amount a dimension grows along an arc.
pub type Transit<T> = fn(&CostModel, usize, usize) -> T;

/// A named cumulative resource tracked along a route.
///
/// The value at a node is the value at its predecessor plus the transit of
/// the arc between them, raised by at most `slack_max` when it would
/// otherwise fall short of the node's lower bound. Every node starts with
/// the bounds `[0, capacity]`; [`set_range`](Self::set_range) narrows them.
///
/// # Examples
///
/// ```
/// use u_cvrptw::cost::CostModel;
/// use u_cvrptw::dimension::Dimension;
/// use u_cvrptw::models::{Instance, Node};
///
/// let instance = Instance::from_nodes(vec![
///     Node::depot(0, 0),
///     Node::new(1, 1, 0, 60),
///     Node::new(2, 2, 0, 50),
/// ]).unwrap();
/// let cost = CostModel::new(&instance, 0.0, 1.0);
/// let capacity = Dimension::load(100, instance.len());
///
/// let load = capacity.arrive(&cost, 0, 0, 1);
/// assert_eq!(load, Some(60));
/// assert_eq!(capacity.arrive(&cost, 60, 1, 2), None);
/// ```
#[derive(Debug, Clone)]
pub struct Dimension<T> {
    name: &'static str,
    transit: Transit<T>,
    slack_max: T,
    capacity: T,
    fix_start_cumul_to_zero: bool,
    bounds: Vec<Bounds<T>>,
}

impl<T: Cumul> Dimension<T> {
    /// Creates a dimension over `num_nodes` nodes.
    pub fn new(
        name: &'static str,
        transit: Transit<T>,
        slack_max: T,
        capacity: T,
        fix_start_cumul_to_zero: bool,
        num_nodes: usize,
    ) -> Self {
        let full = Bounds {
            lower: T::default(),
            upper: capacity,
        };
        Self {
            name,
            transit,
            slack_max,
            capacity,
            fix_start_cumul_to_zero,
            bounds: vec![full; num_nodes],
        }
    }

    /// Restricts the cumulative value at `node` to `[lower, upper]`,
    /// intersected with `[0, capacity]`.
    pub fn set_range(&mut self, node: usize, lower: T, upper: T) {
        self.bounds[node] = Bounds {
            lower: max_of(lower, T::default()),
            upper: min_of(upper, self.capacity),
        };
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Global upper bound on the cumulative value.
    pub fn capacity(&self) -> T {
        self.capacity
    }

    pub fn slack_max(&self) -> T {
        self.slack_max
    }

    pub fn bounds(&self, node: usize) -> Bounds<T> {
        self.bounds[node]
    }

    /// Cumulative value at a vehicle's starting depot.
    pub fn start_cumul(&self, depot: usize) -> T {
        if self.fix_start_cumul_to_zero {
            T::default()
        } else {
            self.bounds[depot].lower
        }
    }

    /// Amount the dimension grows on the arc `from -> to`.
    pub fn transit(&self, cost: &CostModel, from: usize, to: usize) -> T {
        (self.transit)(cost, from, to)
    }

    /// Cumulative value on reaching `to`, before any slack is taken.
    pub fn extend(&self, cost: &CostModel, current: T, from: usize, to: usize) -> T {
        current + self.transit(cost, from, to)
    }

    /// Raises `value` to the lower bound of `node` if the gap fits in the
    /// slack. Otherwise `value` is returned unchanged.
    pub fn absorb_slack(&self, value: T, node: usize) -> T {
        let lower = self.bounds[node].lower;
        if value < lower && lower - value <= self.slack_max {
            lower
        } else {
            value
        }
    }

    pub fn feasible(&self, value: T, node: usize) -> bool {
        self.bounds[node].contains(value)
    }

    /// Realized cumulative value at `to`, or `None` if the arc violates the
    /// bounds of `to`.
    pub fn arrive(&self, cost: &CostModel, current: T, from: usize, to: usize) -> Option<T> {
        let value = self.absorb_slack(self.extend(cost, current, from, to), to);
        self.feasible(value, to).then_some(value)
    }
}
