//! Arc costs and per-node resource deltas.

use crate::distance::DistanceMatrix;
use crate::models::Instance;

/// Read-only cost model owned by one solve session.
///
/// Distances come from a matrix computed once at construction; demands are
/// copied out of the instance. Every method is a pure function of node
/// indices, so a `CostModel` can be shared across threads freely.
///
/// # Examples
///
/// ```
/// use u_cvrptw::cost::CostModel;
/// use u_cvrptw::models::{Instance, Node};
///
/// let instance = Instance::from_nodes(vec![
///     Node::depot(0, 0),
///     Node::new(1, 30, 40, 2),
/// ]).unwrap();
/// let cost = CostModel::new(&instance, 300.0, 10.0);
///
/// assert_eq!(cost.distance(0, 1), 70);
/// assert_eq!(cost.service_time(1), 600.0);
/// assert_eq!(cost.travel_time(0, 1), 7.0);
/// assert_eq!(cost.total_time(0, 1), 607.0);
/// ```
#[derive(Debug, Clone)]
pub struct CostModel {
    distances: DistanceMatrix,
    demands: Vec<i64>,
    time_per_demand_unit: f64,
    speed: f64,
}

impl CostModel {
    /// Builds the cost model for an instance.
    ///
    /// `speed` must be positive; the solver configuration validates it.
    pub fn new(instance: &Instance, time_per_demand_unit: f64, speed: f64) -> Self {
        Self::with_distances(
            DistanceMatrix::from_nodes(instance.nodes()),
            instance.nodes().iter().map(|n| n.demand()).collect(),
            time_per_demand_unit,
            speed,
        )
    }

    /// Builds a cost model over an explicit distance matrix.
    pub fn with_distances(
        distances: DistanceMatrix,
        demands: Vec<i64>,
        time_per_demand_unit: f64,
        speed: f64,
    ) -> Self {
        debug_assert_eq!(distances.size(), demands.len());
        Self {
            distances,
            demands,
            time_per_demand_unit,
            speed,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.demands.len()
    }

    /// Arc cost between two nodes.
    pub fn distance(&self, from: usize, to: usize) -> i64 {
        self.distances.get(from, to)
    }

    /// Demand of a node. Only the destination of an arc matters.
    pub fn demand(&self, node: usize) -> i64 {
        self.demands[node]
    }

    /// Time spent servicing a node, proportional to its demand.
    pub fn service_time(&self, node: usize) -> f64 {
        self.demands[node] as f64 * self.time_per_demand_unit
    }

    pub fn travel_time(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to) as f64 / self.speed
    }

    /// Time charged for driving from `from` to `to` and servicing `to`.
    pub fn total_time(&self, from: usize, to: usize) -> f64 {
        self.service_time(to) + self.travel_time(from, to)
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
