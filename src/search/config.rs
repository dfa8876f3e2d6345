//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::InstanceError;

/// Limits on the work a solve may spend before giving up.
///
/// One attempt is one route construction for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBudget {
    /// Wall-clock limit in milliseconds.
    pub time_limit_ms: u64,
    /// Maximum number of route constructions, if bounded.
    pub max_attempts: Option<u64>,
}

impl SearchBudget {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit_ms: time_limit.as_millis() as u64,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            time_limit_ms: 400_000,
            max_attempts: None,
        }
    }
}

/// Scalar parameters of a solve.
///
/// # Examples
///
/// ```
/// use u_cvrptw::search::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_num_vehicles(2)
///     .with_vehicle_capacity(50);
/// assert_eq!(config.num_vehicles, 2);
/// assert_eq!(config.speed, 10.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub num_vehicles: usize,
    pub vehicle_capacity: i64,
    /// Service time per unit of demand.
    pub time_per_demand_unit: f64,
    /// Distance units covered per time unit.
    pub speed: f64,
    /// Upper bound on every cumulative time value, and the maximum wait.
    pub horizon: f64,
    pub budget: SearchBudget,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            num_vehicles: 5,
            vehicle_capacity: 100,
            time_per_demand_unit: 300.0,
            speed: 10.0,
            horizon: 24.0 * 3600.0,
            budget: SearchBudget::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_num_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    pub fn with_vehicle_capacity(mut self, capacity: i64) -> Self {
        self.vehicle_capacity = capacity;
        self
    }

    pub fn with_time_per_demand_unit(mut self, t: f64) -> Self {
        self.time_per_demand_unit = t;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), InstanceError> {
        let invalid = |msg: &str| -> Result<(), InstanceError> {
            Err(InstanceError::InvalidConfig(msg.to_string()))
        };
        if self.num_vehicles == 0 {
            return invalid("at least one vehicle is required");
        }
        if self.vehicle_capacity <= 0 {
            return invalid("vehicle capacity must be positive");
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return invalid("speed must be positive and finite");
        }
        if !self.time_per_demand_unit.is_finite() || self.time_per_demand_unit < 0.0 {
            return invalid("time per demand unit must be non-negative and finite");
        }
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return invalid("horizon must be positive and finite");
        }
        Ok(())
    }
}
