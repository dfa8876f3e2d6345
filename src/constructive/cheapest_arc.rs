//! Path-cheapest-arc route construction.
//!
//! # Algorithm
//!
//! Starting from the depot with every dimension reset, repeatedly look at
//! all unassigned nodes from the current end of the route. A candidate is
//! kept only if both the load and the time dimension accept it, and the
//! vehicle could still drive back to the depot from it. Among the kept
//! candidates the one reached over the shortest arc is appended; ties go
//! to the lowest node index. The route closes at the depot once no
//! candidate is left.
//!
//! Appended nodes are never removed again.
//!
//! # Complexity
//!
//! O(n²) per vehicle where n = number of nodes.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::UnassignedPool;
use crate::cost::CostModel;
use crate::dimension::Dimension;
use crate::models::{Route, Stop, Vehicle};

/// Counters collected while building routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Candidate arcs examined.
    pub candidates_evaluated: u64,
    /// Candidates rejected by the load dimension.
    pub rejected_capacity: u64,
    /// Candidates rejected by the time dimension.
    pub rejected_time: u64,
    /// Candidates accepted on their own but unable to return to the depot.
    pub rejected_return: u64,
}

impl BuildStats {
    pub fn rejected(&self) -> u64 {
        self.rejected_capacity + self.rejected_time + self.rejected_return
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    node: usize,
    distance: i64,
    load: i64,
    time: f64,
}

/// Builds one vehicle route at a time by greedy cheapest-arc extension.
///
/// # Examples
///
/// ```
/// use u_cvrptw::constructive::{RouteBuilder, UnassignedPool};
/// use u_cvrptw::cost::CostModel;
/// use u_cvrptw::dimension::Dimension;
/// use u_cvrptw::models::{Instance, Node, Vehicle};
///
/// let instance = Instance::from_nodes(vec![
///     Node::depot(0, 0),
///     Node::new(1, 2, 0, 10),
///     Node::new(2, 1, 0, 10),
/// ]).unwrap();
/// let cost = CostModel::new(&instance, 0.0, 1.0);
/// let load = Dimension::load(100, instance.len());
/// let time = Dimension::time(&instance, 1000.0);
///
/// let builder = RouteBuilder::new(&cost, &load, &time);
/// let (route, pool) = builder.build(&Vehicle::new(0, 100), UnassignedPool::new(3));
/// assert_eq!(route.node_ids(), vec![0, 2, 1, 0]);
/// assert!(pool.is_empty());
/// ```
pub struct RouteBuilder<'a> {
    cost: &'a CostModel,
    load: &'a Dimension<i64>,
    time: &'a Dimension<f64>,
    depot: usize,
}

impl<'a> RouteBuilder<'a> {
    pub fn new(cost: &'a CostModel, load: &'a Dimension<i64>, time: &'a Dimension<f64>) -> Self {
        Self {
            cost,
            load,
            time,
            depot: 0,
        }
    }

    /// Builds the route of `vehicle` from the nodes in `pool`.
    ///
    /// Loads stay within both the load dimension and the vehicle's own
    /// capacity. Returns the closed route and the nodes still unassigned.
    pub fn build(&self, vehicle: &Vehicle, pool: UnassignedPool) -> (Route, UnassignedPool) {
        let mut stats = BuildStats::default();
        self.build_with_stats(vehicle, pool, &mut stats)
    }

    /// Like [`build`](Self::build), adding counters to `stats`.
    pub fn build_with_stats(
        &self,
        vehicle: &Vehicle,
        mut pool: UnassignedPool,
        stats: &mut BuildStats,
    ) -> (Route, UnassignedPool) {
        let mut current = Stop {
            node: self.depot,
            load: self.load.start_cumul(self.depot),
            time: self.time.start_cumul(self.depot),
        };
        let mut route = Route::new(vehicle.id(), current);

        while let Some(next) = self.cheapest_feasible(vehicle, &current, &pool, stats) {
            pool.take(next.node);
            current = Stop {
                node: next.node,
                load: next.load,
                time: next.time,
            };
            route.push_stop(current, next.distance);
        }

        let closing = self.close(&current);
        route.push_stop(closing, self.cost.distance(current.node, self.depot));

        debug!(
            vehicle = vehicle.id(),
            stops = route.len(),
            distance = route.total_distance(),
            load = closing.load,
            end_time = closing.time,
            remaining = pool.len(),
            "route closed"
        );
        (route, pool)
    }

    /// Route of a vehicle that serves nothing: depot to depot.
    pub fn empty_route(&self, vehicle: &Vehicle) -> Route {
        let start = Stop {
            node: self.depot,
            load: self.load.start_cumul(self.depot),
            time: self.time.start_cumul(self.depot),
        };
        let mut route = Route::new(vehicle.id(), start);
        route.push_stop(self.close(&start), 0);
        route
    }

    fn cheapest_feasible(
        &self,
        vehicle: &Vehicle,
        from: &Stop,
        pool: &UnassignedPool,
        stats: &mut BuildStats,
    ) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for node in pool.iter() {
            stats.candidates_evaluated += 1;

            let Some(load) = self
                .load
                .arrive(self.cost, from.load, from.node, node)
                .filter(|&load| load <= vehicle.capacity())
            else {
                stats.rejected_capacity += 1;
                trace!(from = from.node, to = node, dimension = self.load.name(), "rejected");
                continue;
            };
            let Some(time) = self.time.arrive(self.cost, from.time, from.node, node) else {
                stats.rejected_time += 1;
                trace!(from = from.node, to = node, dimension = self.time.name(), "rejected");
                continue;
            };
            if !self.can_return(node, load, time) {
                stats.rejected_return += 1;
                trace!(from = from.node, to = node, "rejected: no way back to depot");
                continue;
            }

            // Ascending iteration plus strict comparison keeps the lowest index on ties.
            let distance = self.cost.distance(from.node, node);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Candidate {
                    node,
                    distance,
                    load,
                    time,
                });
            }
        }

        best
    }

    fn can_return(&self, node: usize, load: i64, time: f64) -> bool {
        self.load.arrive(self.cost, load, node, self.depot).is_some()
            && self.time.arrive(self.cost, time, node, self.depot).is_some()
    }

    fn close(&self, last: &Stop) -> Stop {
        let load = self.load.extend(self.cost, last.load, last.node, self.depot);
        let time = self.time.extend(self.cost, last.time, last.node, self.depot);
        Stop {
            node: self.depot,
            load: self.load.absorb_slack(load, self.depot),
            time: self.time.absorb_slack(time, self.depot),
        }
    }
}
