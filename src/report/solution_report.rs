//! Per-vehicle, per-stop report of a finalized assignment.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::models::Assignment;

/// Header row written before each vehicle's stops in the CSV export.
pub const CSV_HEADER: [&str; 4] = ["node index", "load", "Time Min", "Time Max"];

/// Decimal places kept on reported times.
pub const TIME_DECIMALS: i32 = 3;

/// Rounds an accumulated time to [`TIME_DECIMALS`] places so that sums of
/// fractional travel times print without float noise.
fn round_time(time: f64) -> f64 {
    let scale = 10f64.powi(TIME_DECIMALS);
    (time * scale).round() / scale
}

/// One stop as reported.
///
/// The construction never relaxes a cumulative value after the fact, so the
/// minimum and maximum time are the same realized value, rounded to
/// [`TIME_DECIMALS`] places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StopRecord {
    pub node_index: usize,
    pub load: i64,
    pub time_min: f64,
    pub time_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleReport {
    pub vehicle_index: usize,
    /// Stops in visiting order, depot at both ends.
    pub stops: Vec<StopRecord>,
}

/// Read-only view of an assignment for export.
///
/// `Display` renders the console summary; [`write_csv`](Self::write_csv)
/// renders the delimited export.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::{Assignment, Route, Stop};
/// use u_cvrptw::report::SolutionReport;
///
/// let depot = Stop { node: 0, load: 0, time: 0.0 };
/// let mut route = Route::new(0, depot);
/// route.push_stop(Stop { node: 1, load: 5, time: 12.0 }, 7);
/// route.push_stop(Stop { node: 0, load: 5, time: 19.0 }, 7);
///
/// let report = SolutionReport::new(&Assignment::new(vec![route]));
/// assert_eq!(report.objective, 14);
/// assert!(report
///     .to_string()
///     .contains("Route 0: 0 Load(0) Time(0, 0) ->  1 Load(5) Time(12, 12) ->  0 Load(5) Time(19, 19)"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionReport {
    pub objective: i64,
    pub vehicles: Vec<VehicleReport>,
}

impl SolutionReport {
    pub fn new(assignment: &Assignment) -> Self {
        let vehicles = assignment
            .routes()
            .iter()
            .map(|route| VehicleReport {
                vehicle_index: route.vehicle_id(),
                stops: route
                    .stops()
                    .iter()
                    .map(|s| {
                        let time = round_time(s.time);
                        StopRecord {
                            node_index: s.node,
                            load: s.load,
                            time_min: time,
                            time_max: time,
                        }
                    })
                    .collect(),
            })
            .collect();
        Self {
            objective: assignment.objective(),
            vehicles,
        }
    }

    /// Writes the delimited export: for each vehicle a `Vehicle Number`
    /// row, the header row, then one row per stop.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        for vehicle in &self.vehicles {
            writeln!(out, "Vehicle Number,{}", vehicle.vehicle_index)?;
            writeln!(out, "{}", CSV_HEADER.join(","))?;
            for stop in &vehicle.stops {
                writeln!(
                    out,
                    "{},{},{},{}",
                    stop.node_index, stop.load, stop.time_min, stop.time_max
                )?;
            }
        }
        out.flush()
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total distance of all routes: {}", self.objective)?;
        for vehicle in &self.vehicles {
            writeln!(f)?;
            write!(f, "Route {}:", vehicle.vehicle_index)?;
            let last = vehicle.stops.len().saturating_sub(1);
            for (i, stop) in vehicle.stops.iter().enumerate() {
                write!(
                    f,
                    " {} Load({}) Time({}, {})",
                    stop.node_index, stop.load, stop.time_min, stop.time_max
                )?;
                if i < last {
                    write!(f, " -> ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
