//! Domain model types for the vehicle routing problem with time windows.
//!
//! Provides the static data (nodes with demands and time windows, a
//! homogeneous fleet, the validated instance) and the realized output
//! (routes of stops carrying cumulative values, and the final assignment).

mod assignment;
mod instance;
mod node;
mod route;
mod vehicle;

pub use assignment::Assignment;
pub use instance::{Instance, InstanceData};
pub use node::{Node, TimeWindow};
pub use route::{Route, Stop};
pub use vehicle::Vehicle;
