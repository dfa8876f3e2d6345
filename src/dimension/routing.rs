//! The two dimensions of the vehicle routing model: load and time.

use super::Dimension;
use crate::models::Instance;

impl Dimension<i64> {
    /// Load carried by a vehicle.
    ///
    /// Transit is the demand of the destination node, no slack is allowed,
    /// and every node is bounded by `[0, vehicle_capacity]`. The value is
    /// reset to zero at the start of each route.
    pub fn load(vehicle_capacity: i64, num_nodes: usize) -> Self {
        Dimension::new(
            "Capacity",
            |cost, _from, to| cost.demand(to),
            0,
            vehicle_capacity,
            true,
            num_nodes,
        )
    }
}

impl Dimension<f64> {
    /// Elapsed time along a route.
    ///
    /// Transit is the travel time of the arc plus the service time of the
    /// destination. A vehicle may wait up to `horizon` before service, and
    /// every non-depot node is bounded by its time window within
    /// `[0, horizon]`. The depot keeps the full horizon. The value is reset
    /// to zero at the start of each route.
    pub fn time(instance: &Instance, horizon: f64) -> Self {
        let mut dimension = Dimension::new(
            "Time",
            |cost, from, to| cost.total_time(from, to),
            horizon,
            horizon,
            true,
            instance.len(),
        );
        for node in instance.nodes().iter().skip(1) {
            if let Some(tw) = node.time_window() {
                dimension.set_range(node.index(), tw.start(), tw.end());
            }
        }
        dimension
    }
}
