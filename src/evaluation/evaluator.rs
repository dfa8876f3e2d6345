//! Independent feasibility check of a finished assignment.

use crate::cost::CostModel;
use crate::models::{Assignment, Instance};
use crate::search::SolverConfig;

/// A type of constraint violation in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A non-depot node appears on no route.
    NodeUnvisited { node: usize },
    /// A node appears more than once, or is not part of the instance.
    NodeRepeated { node: usize },
    /// A route does not start and end at the depot.
    NotDepotBounded { vehicle: usize },
    /// Load or time at the starting depot is not zero.
    StartNotReset { vehicle: usize },
    /// Cumulative load above vehicle capacity.
    CapacityExceeded {
        vehicle: usize,
        node: usize,
        load: i64,
        capacity: i64,
    },
    /// Load does not grow by the demand of the node reached.
    LoadMismatch {
        vehicle: usize,
        node: usize,
        expected: i64,
        found: i64,
    },
    /// Cumulative time outside the node's window (or the horizon at the
    /// depot).
    TimeWindowViolated {
        vehicle: usize,
        node: usize,
        time: f64,
        start: f64,
        end: f64,
    },
    /// Cumulative time earlier than the previous stop plus the arc time.
    TimeTooEarly {
        vehicle: usize,
        node: usize,
        time: f64,
        earliest: f64,
    },
    /// Reported objective differs from the recomputed distance.
    ObjectiveMismatch { reported: i64, recomputed: i64 },
}

/// A constraint violation in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub kind: ViolationType,
}

impl Violation {
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Re-checks an assignment against the instance and configuration it was
/// solved with, without trusting any of the solver's bookkeeping.
///
/// # Examples
///
/// ```
/// use u_cvrptw::evaluation::AssignmentEvaluator;
/// use u_cvrptw::models::{Instance, InstanceData};
/// use u_cvrptw::search::{Solver, SolverConfig};
///
/// let instance = Instance::try_from(InstanceData {
///     locations: vec![[0, 0], [3, 4]],
///     demands: vec![0, 5],
///     start_times: vec![0, 0],
///     end_times: vec![0, 100_000],
/// }).unwrap();
/// let config = SolverConfig::default().with_num_vehicles(1);
/// let assignment = Solver::new(config).unwrap().solve(&instance).unwrap();
///
/// let evaluator = AssignmentEvaluator::new(&instance, &config);
/// assert!(evaluator.evaluate(&assignment).is_empty());
/// ```
pub struct AssignmentEvaluator<'a> {
    instance: &'a Instance,
    config: &'a SolverConfig,
    cost: CostModel,
}

/// Tolerance for comparing accumulated floating point times.
const TIME_EPS: f64 = 1e-6;

impl<'a> AssignmentEvaluator<'a> {
    pub fn new(instance: &'a Instance, config: &'a SolverConfig) -> Self {
        let cost = CostModel::new(instance, config.time_per_demand_unit, config.speed);
        Self {
            instance,
            config,
            cost,
        }
    }

    /// Returns every violation found; an empty list means feasible.
    pub fn evaluate(&self, assignment: &Assignment) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.check_coverage(assignment, &mut violations);

        let mut recomputed = 0;
        for route in assignment.routes() {
            let vehicle = route.vehicle_id();
            let stops = route.stops();
            let bounded = stops.len() >= 2
                && stops.first().is_some_and(|s| s.node == 0)
                && stops.last().is_some_and(|s| s.node == 0);
            if !bounded {
                violations.push(Violation::new(ViolationType::NotDepotBounded { vehicle }));
                continue;
            }
            if stops[0].load != 0 || stops[0].time != 0.0 {
                violations.push(Violation::new(ViolationType::StartNotReset { vehicle }));
            }

            for pair in stops.windows(2) {
                let (prev, stop) = (&pair[0], &pair[1]);
                if stop.node >= self.instance.len() {
                    continue;
                }
                recomputed += self.cost.distance(prev.node, stop.node);

                let expected = prev.load + self.cost.demand(stop.node);
                if stop.load != expected {
                    violations.push(Violation::new(ViolationType::LoadMismatch {
                        vehicle,
                        node: stop.node,
                        expected,
                        found: stop.load,
                    }));
                }
                if stop.load > self.config.vehicle_capacity {
                    violations.push(Violation::new(ViolationType::CapacityExceeded {
                        vehicle,
                        node: stop.node,
                        load: stop.load,
                        capacity: self.config.vehicle_capacity,
                    }));
                }

                let earliest = prev.time + self.cost.total_time(prev.node, stop.node);
                if stop.time + TIME_EPS < earliest {
                    violations.push(Violation::new(ViolationType::TimeTooEarly {
                        vehicle,
                        node: stop.node,
                        time: stop.time,
                        earliest,
                    }));
                }
                let (start, end) = self.window(stop.node);
                if stop.time + TIME_EPS < start || stop.time > end + TIME_EPS {
                    violations.push(Violation::new(ViolationType::TimeWindowViolated {
                        vehicle,
                        node: stop.node,
                        time: stop.time,
                        start,
                        end,
                    }));
                }
            }
        }

        if recomputed != assignment.objective() {
            violations.push(Violation::new(ViolationType::ObjectiveMismatch {
                reported: assignment.objective(),
                recomputed,
            }));
        }
        violations
    }

    fn check_coverage(&self, assignment: &Assignment, violations: &mut Vec<Violation>) {
        let mut visits = vec![0usize; self.instance.len()];
        for node in assignment.routes().iter().flat_map(|r| r.customer_ids()) {
            match visits.get_mut(node) {
                Some(count) => *count += 1,
                None => violations.push(Violation::new(ViolationType::NodeRepeated { node })),
            }
        }
        for (node, &count) in visits.iter().enumerate().skip(1) {
            match count {
                0 => violations.push(Violation::new(ViolationType::NodeUnvisited { node })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::NodeRepeated { node })),
            }
        }
    }

    /// Time bounds at a node: its window within `[0, horizon]`, or the
    /// full horizon for the depot.
    fn window(&self, node: usize) -> (f64, f64) {
        let horizon = self.config.horizon;
        match self.instance.node(node).and_then(|n| n.time_window()) {
            Some(tw) => (tw.start().max(0.0), tw.end().min(horizon)),
            None => (0.0, horizon),
        }
    }
}
