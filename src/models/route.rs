//! Route and stop types.

use serde::{Deserialize, Serialize};

/// A single stop within a route, with the realized cumulative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Node visited at this stop.
    pub node: usize,
    /// Cumulative load after servicing this stop.
    pub load: i64,
    /// Cumulative time at this stop, after any waiting.
    pub time: f64,
}

/// The ordered stops of one vehicle, depot included at both ends.
///
/// A route is opened at the depot and grows by appending stops; the
/// distance of every appended arc is accumulated as it goes.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::{Route, Stop};
///
/// let mut route = Route::new(0, Stop { node: 0, load: 0, time: 0.0 });
/// route.push_stop(Stop { node: 3, load: 6, time: 1800.0 }, 45);
/// route.push_stop(Stop { node: 0, load: 6, time: 1804.5 }, 45);
/// assert_eq!(route.customer_ids(), vec![3]);
/// assert_eq!(route.total_distance(), 90);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    vehicle_id: usize,
    stops: Vec<Stop>,
    total_distance: i64,
}

impl Route {
    /// Opens a route for the given vehicle at its starting depot stop.
    pub fn new(vehicle_id: usize, start: Stop) -> Self {
        Self {
            vehicle_id,
            stops: vec![start],
            total_distance: 0,
        }
    }

    /// Appends a stop reached over an arc of length `arc_distance`.
    pub fn push_stop(&mut self, stop: Stop, arc_distance: i64) {
        self.total_distance += arc_distance;
        self.stops.push(stop);
    }

    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// All stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Node indices in visiting order, depot included.
    pub fn node_ids(&self) -> Vec<usize> {
        self.stops.iter().map(|s| s.node).collect()
    }

    /// Non-depot nodes in visiting order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.stops
            .iter()
            .map(|s| s.node)
            .filter(|&n| n != 0)
            .collect()
    }

    /// Number of non-depot stops.
    pub fn len(&self) -> usize {
        self.stops.iter().filter(|s| s.node != 0).count()
    }

    /// Returns `true` if the vehicle serves no node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the arc distances traversed.
    pub fn total_distance(&self) -> i64 {
        self.total_distance
    }

    /// Load carried when the route ends.
    pub fn total_load(&self) -> i64 {
        self.stops.last().map_or(0, |s| s.load)
    }

    /// Cumulative time at the last stop.
    pub fn end_time(&self) -> f64 {
        self.stops.last().map_or(0.0, |s| s.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depot_stop() -> Stop {
        Stop {
            node: 0,
            load: 0,
            time: 0.0,
        }
    }

    #[test]
    fn test_route_opened_at_depot() {
        let r = Route::new(2, depot_stop());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.vehicle_id(), 2);
        assert_eq!(r.node_ids(), vec![0]);
        assert_eq!(r.total_distance(), 0);
        assert_eq!(r.total_load(), 0);
    }

    #[test]
    fn test_route_push_stop() {
        let mut r = Route::new(1, depot_stop());
        r.push_stop(
            Stop {
                node: 5,
                load: 20,
                time: 10.0,
            },
            4,
        );
        r.push_stop(
            Stop {
                node: 3,
                load: 35,
                time: 25.0,
            },
            6,
        );
        r.push_stop(
            Stop {
                node: 0,
                load: 35,
                time: 30.0,
            },
            5,
        );
        assert_eq!(r.len(), 2);
        assert_eq!(r.node_ids(), vec![0, 5, 3, 0]);
        assert_eq!(r.customer_ids(), vec![5, 3]);
        assert_eq!(r.total_distance(), 15);
        assert_eq!(r.total_load(), 35);
        assert_eq!(r.end_time(), 30.0);
    }
}
