//! Error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid instance data or solver configuration. The solve is never
/// attempted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InstanceError {
    #[error("Specify an instance greater than 0.")]
    Empty,
    #[error("expected {expected} entries in `{field}`, found {found}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("node at position {position} has index {index}")]
    IndexMismatch { position: usize, index: usize },
    #[error("node {node} has negative demand {demand}")]
    NegativeDemand { node: usize, demand: i64 },
    #[error("the depot must have zero demand, found {0}")]
    DepotDemand(i64),
    #[error("node {node} has an invalid time window [{start}, {end}]")]
    InvalidTimeWindow { node: usize, start: f64, end: f64 },
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// Why the search stopped before every node was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustionReason {
    /// The wall-clock budget ran out.
    TimeLimit,
    /// The maximum number of route construction attempts was reached.
    AttemptLimit,
    /// Every vehicle was built and nodes are still unassigned.
    FleetExhausted,
}

impl fmt::Display for ExhaustionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExhaustionReason::TimeLimit => write!(f, "time limit reached"),
            ExhaustionReason::AttemptLimit => write!(f, "attempt limit reached"),
            ExhaustionReason::FleetExhausted => write!(f, "no vehicle left"),
        }
    }
}

/// Outcome of a solve that did not produce an assignment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// The search ended without covering every node. The partial
    /// assignment is discarded.
    #[error("No solution found.")]
    NoSolution {
        reason: ExhaustionReason,
        unassigned: usize,
    },
    #[error(transparent)]
    Instance(#[from] InstanceError),
}
