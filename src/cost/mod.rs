//! Cost model: arc distances, demands, service and travel times.

mod model;

pub use model::CostModel;
