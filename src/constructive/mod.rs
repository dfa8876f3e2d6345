//! Route construction.
//!
//! - [`RouteBuilder`]: path-cheapest-arc extension under load and time
//!   dimensions, one vehicle at a time, O(n²) per vehicle
//! - [`UnassignedPool`]: nodes still waiting for a route, handed from one
//!   vehicle's construction to the next

mod cheapest_arc;
mod pool;

pub use cheapest_arc::{BuildStats, RouteBuilder};
pub use pool::UnassignedPool;
