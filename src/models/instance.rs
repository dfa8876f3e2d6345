//! Routing instance: the validated, immutable node set.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Node, TimeWindow};
use crate::error::InstanceError;

/// Raw instance arrays as supplied by a data-loading collaborator.
///
/// All four arrays have one entry per location; index 0 is the depot and
/// its time window entries are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceData {
    pub locations: Vec<[i64; 2]>,
    pub demands: Vec<i64>,
    pub start_times: Vec<i64>,
    pub end_times: Vec<i64>,
}

impl InstanceData {
    /// Generates a reproducible random instance with `num_customers`
    /// nodes besides the depot.
    ///
    /// Coordinates lie on a 100 x 100 grid, demands in `1..=25`, and every
    /// window spans 18 000 time units starting somewhere in the first
    /// 60 000.
    pub fn random<R: Rng>(num_customers: usize, rng: &mut R) -> Self {
        let n = num_customers + 1;
        let mut data = Self {
            locations: Vec::with_capacity(n),
            demands: Vec::with_capacity(n),
            start_times: Vec::with_capacity(n),
            end_times: Vec::with_capacity(n),
        };
        for i in 0..n {
            data.locations
                .push([rng.random_range(0..=100), rng.random_range(0..=100)]);
            let demand = if i == 0 { 0 } else { rng.random_range(1..=25) };
            data.demands.push(demand);
            let start = rng.random_range(0..=60_000);
            data.start_times.push(start);
            data.end_times.push(start + 18_000);
        }
        data
    }
}

/// A validated routing instance.
///
/// Node 0 is the depot. Nodes are immutable once loaded.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::{Instance, InstanceData};
///
/// let data = InstanceData {
///     locations: vec![[0, 0], [3, 4]],
///     demands: vec![0, 5],
///     start_times: vec![0, 0],
///     end_times: vec![0, 100_000],
/// };
/// let instance = Instance::try_from(data).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.num_customers(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    nodes: Vec<Node>,
}

impl Instance {
    /// Builds an instance from already-constructed nodes.
    ///
    /// Nodes must be indexed `0..len` in order, node 0 being the depot
    /// with zero demand.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, InstanceError> {
        let Some(depot) = nodes.first() else {
            return Err(InstanceError::Empty);
        };
        if depot.demand() != 0 {
            return Err(InstanceError::DepotDemand(depot.demand()));
        }
        for (i, node) in nodes.iter().enumerate() {
            if node.index() != i {
                return Err(InstanceError::IndexMismatch {
                    position: i,
                    index: node.index(),
                });
            }
            if node.demand() < 0 {
                return Err(InstanceError::NegativeDemand {
                    node: i,
                    demand: node.demand(),
                });
            }
        }
        Ok(Self { nodes })
    }

    /// All nodes, depot first.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn depot(&self) -> &Node {
        &self.nodes[0]
    }

    /// Number of nodes, depot included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: an instance holds at least the depot.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of non-depot nodes.
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> i64 {
        self.nodes.iter().map(Node::demand).sum()
    }
}

impl TryFrom<InstanceData> for Instance {
    type Error = InstanceError;

    fn try_from(data: InstanceData) -> Result<Self, Self::Error> {
        let n = data.locations.len();
        if n == 0 {
            return Err(InstanceError::Empty);
        }
        for (field, found) in [
            ("demands", data.demands.len()),
            ("start_times", data.start_times.len()),
            ("end_times", data.end_times.len()),
        ] {
            if found != n {
                return Err(InstanceError::LengthMismatch {
                    field,
                    expected: n,
                    found,
                });
            }
        }

        let mut nodes = Vec::with_capacity(n);
        let [x, y] = data.locations[0];
        nodes.push(Node::new(0, x, y, data.demands[0]));
        for i in 1..n {
            let [x, y] = data.locations[i];
            let (start, end) = (data.start_times[i] as f64, data.end_times[i] as f64);
            let tw = TimeWindow::new(start, end)
                .ok_or(InstanceError::InvalidTimeWindow { node: i, start, end })?;
            nodes.push(Node::new(i, x, y, data.demands[i]).with_time_window(tw));
        }
        Self::from_nodes(nodes)
    }
}

impl From<&Instance> for InstanceData {
    fn from(instance: &Instance) -> Self {
        let nodes = instance.nodes();
        let window = |n: &Node, f: fn(&TimeWindow) -> f64| {
            n.time_window().map_or(0, |tw| f(tw) as i64)
        };
        Self {
            locations: nodes.iter().map(|n| [n.x(), n.y()]).collect(),
            demands: nodes.iter().map(Node::demand).collect(),
            start_times: nodes.iter().map(|n| window(n, TimeWindow::start)).collect(),
            end_times: nodes.iter().map(|n| window(n, TimeWindow::end)).collect(),
        }
    }
}
