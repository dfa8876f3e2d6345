//! Fleet-level search controller.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::monitor::{CompositeMonitor, SearchCommand, SearchMonitor};
use super::SolverConfig;
use crate::constructive::{BuildStats, RouteBuilder, UnassignedPool};
use crate::cost::CostModel;
use crate::dimension::Dimension;
use crate::error::{ExhaustionReason, InstanceError, SolveError};
use crate::models::{Assignment, Instance, Route, Vehicle};

/// Where the controller stands. `Complete` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Building { vehicle: usize },
    Complete,
    Exhausted(ExhaustionReason),
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Complete | SearchState::Exhausted(_))
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchState::Idle => write!(f, "Idle"),
            SearchState::Building { vehicle } => write!(f, "Building(vehicle={})", vehicle),
            SearchState::Complete => write!(f, "Complete"),
            SearchState::Exhausted(reason) => write!(f, "Exhausted({})", reason),
        }
    }
}

/// Counters for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Route constructions run.
    pub attempts: u64,
    pub build: BuildStats,
    pub elapsed: Duration,
}

/// Assigns the fleet to an instance by one greedy construction pass.
///
/// Vehicles are built in order, vehicle 0 first, each from the nodes the
/// previous ones left over. The solve succeeds once no node is left and
/// fails if the budget or the fleet runs out first.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::{Instance, InstanceData};
/// use u_cvrptw::search::{Solver, SolverConfig};
///
/// let instance = Instance::try_from(InstanceData {
///     locations: vec![[0, 0], [3, 4], [6, 0]],
///     demands: vec![0, 60, 60],
///     start_times: vec![0, 0, 0],
///     end_times: vec![0, 100_000, 100_000],
/// }).unwrap();
///
/// let solver = Solver::new(SolverConfig::default().with_num_vehicles(2)).unwrap();
/// let assignment = solver.solve(&instance).unwrap();
/// assert!(assignment.is_partition(instance.len()));
/// assert_eq!(assignment.num_used_vehicles(), 2);
///
/// let single = Solver::new(SolverConfig::default().with_num_vehicles(1)).unwrap();
/// assert!(single.solve(&instance).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver after validating the configuration.
    pub fn new(config: SolverConfig) -> Result<Self, InstanceError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, instance: &Instance) -> Result<Assignment, SolveError> {
        self.solve_with_stats(instance).0
    }

    /// Solves and also returns the search counters, whether or not a
    /// solution was found.
    pub fn solve_with_stats(
        &self,
        instance: &Instance,
    ) -> (Result<Assignment, SolveError>, SolveStats) {
        let started = Instant::now();
        let mut stats = SolveStats::default();
        let mut monitor = CompositeMonitor::from_budget(&self.config.budget);

        let cost = CostModel::new(
            instance,
            self.config.time_per_demand_unit,
            self.config.speed,
        );
        let load = Dimension::load(self.config.vehicle_capacity, instance.len());
        let time = Dimension::time(instance, self.config.horizon);
        let builder = RouteBuilder::new(&cost, &load, &time);
        let fleet = Vehicle::fleet(self.config.num_vehicles, self.config.vehicle_capacity);

        info!(
            nodes = instance.len(),
            vehicles = fleet.len(),
            capacity = self.config.vehicle_capacity,
            horizon = self.config.horizon,
            "solve started"
        );

        let mut pool = UnassignedPool::new(instance.len());
        let mut routes: Vec<Route> = Vec::with_capacity(fleet.len());
        let mut state = SearchState::Idle;

        let outcome = loop {
            let next = match state {
                SearchState::Idle => {
                    monitor.on_enter_search();
                    SearchState::Building { vehicle: 0 }
                }
                SearchState::Building { vehicle } => {
                    let (route, rest) =
                        builder.build_with_stats(&fleet[vehicle], pool, &mut stats.build);
                    pool = rest;
                    routes.push(route);
                    stats.attempts += 1;
                    monitor.on_attempt();

                    if pool.is_empty() {
                        SearchState::Complete
                    } else if let SearchCommand::Terminate(reason) = monitor.search_command() {
                        SearchState::Exhausted(reason)
                    } else if vehicle + 1 < fleet.len() {
                        SearchState::Building {
                            vehicle: vehicle + 1,
                        }
                    } else {
                        SearchState::Exhausted(ExhaustionReason::FleetExhausted)
                    }
                }
                SearchState::Complete => break Ok(()),
                SearchState::Exhausted(reason) => break Err(reason),
            };
            debug!(from = %state, to = %next, "search state");
            state = next;
        };

        stats.elapsed = started.elapsed();
        let result = match outcome {
            Ok(()) => {
                for vehicle in &fleet[routes.len()..] {
                    routes.push(builder.empty_route(vehicle));
                }
                let assignment = Assignment::new(routes);
                debug_assert!(assignment.is_partition(instance.len()));
                info!(
                    objective = assignment.objective(),
                    used_vehicles = assignment.num_used_vehicles(),
                    attempts = stats.attempts,
                    elapsed_ms = stats.elapsed.as_millis() as u64,
                    "solution found"
                );
                Ok(assignment)
            }
            Err(reason) => {
                info!(
                    %reason,
                    unassigned = pool.len(),
                    attempts = stats.attempts,
                    elapsed_ms = stats.elapsed.as_millis() as u64,
                    "no solution found"
                );
                Err(SolveError::NoSolution {
                    reason,
                    unassigned: pool.len(),
                })
            }
        };

        (result, stats)
    }
}
