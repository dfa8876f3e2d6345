//! Finalized assignment of routes to vehicles.

use serde::{Deserialize, Serialize};

use super::Route;

/// The realized routes of a successful solve, one per vehicle.
///
/// Immutable once built; the objective is the total distance traversed.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::{Assignment, Route, Stop};
///
/// let depot = Stop { node: 0, load: 0, time: 0.0 };
/// let mut r = Route::new(0, depot);
/// r.push_stop(Stop { node: 1, load: 5, time: 3.0 }, 3);
/// r.push_stop(Stop { node: 0, load: 5, time: 6.0 }, 3);
///
/// let a = Assignment::new(vec![r, Route::new(1, depot)]);
/// assert_eq!(a.objective(), 6);
/// assert_eq!(a.num_served(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    routes: Vec<Route>,
    objective: i64,
}

impl Assignment {
    /// Finalizes the given routes, ordered by vehicle.
    pub fn new(routes: Vec<Route>) -> Self {
        let objective = routes.iter().map(Route::total_distance).sum();
        Self { routes, objective }
    }

    /// Routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route of the given vehicle.
    pub fn route(&self, vehicle_id: usize) -> Option<&Route> {
        self.routes.iter().find(|r| r.vehicle_id() == vehicle_id)
    }

    /// Sum of all arc distances across every route.
    pub fn objective(&self) -> i64 {
        self.objective
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of vehicles that serve at least one node.
    pub fn num_used_vehicles(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total number of non-depot stops across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Returns `true` if every node in `1..num_nodes` is visited exactly
    /// once across all routes and no other node appears.
    pub fn is_partition(&self, num_nodes: usize) -> bool {
        let mut seen = vec![false; num_nodes];
        for node in self.routes.iter().flat_map(Route::customer_ids) {
            match seen.get_mut(node) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.iter().skip(1).all(|&s| s)
    }
}
