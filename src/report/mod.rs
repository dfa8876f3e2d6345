//! Solution reporting: console summary and delimited export.

mod solution_report;

pub use solution_report::{SolutionReport, StopRecord, VehicleReport, CSV_HEADER, TIME_DECIMALS};
