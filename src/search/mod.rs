//! Search control: drives route construction across the fleet under a
//! budget and decides between a complete assignment and failure.
//!
//! - [`Solver`]: the fleet-level controller
//! - [`SolverConfig`], [`SearchBudget`]: scalar parameters and limits
//! - [`monitor`]: budget monitors polled after each route construction

mod config;
pub mod monitor;
mod solver;

pub use config::{SearchBudget, SolverConfig};
pub use solver::{SearchState, SolveStats, Solver};
