//! Assignment evaluation: coverage, capacity, time windows and objective
//! checked independently of the solver.

mod evaluator;

pub use evaluator::{AssignmentEvaluator, Violation, ViolationType};
