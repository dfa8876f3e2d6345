//! Cumulative dimensions.
//!
//! A [`Dimension`] tracks one resource along a route (vehicle load or
//! elapsed time), bounds it at every node, and reports whether an arc can
//! be taken. Infeasibility is a `None`, not an error.

mod cumulative;
mod routing;

pub use cumulative::{Bounds, Cumul, Dimension, Transit};
