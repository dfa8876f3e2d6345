//! # u-cvrptw
//!
//! Capacitated vehicle routing with time windows: builds one route per
//! vehicle with a greedy path-cheapest-arc construction over cumulative
//! load and time dimensions, under a search budget.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Node, TimeWindow, Vehicle, Route, Assignment, Instance)
//! - [`distance`]: Manhattan distance matrix
//! - [`cost`]: Arc cost, service time and travel time callbacks
//! - [`dimension`]: Cumulative dimensions with slack, capacity and per-node bounds
//! - [`constructive`]: Path-cheapest-arc route builder and the unassigned pool
//! - [`search`]: Fleet-level solver, configuration and budget monitors
//! - [`evaluation`]: Independent feasibility check of an assignment
//! - [`report`]: Console summary and CSV export
//! - [`error`]: Instance and solve errors

pub mod constructive;
pub mod cost;
pub mod dimension;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod report;
pub mod search;
