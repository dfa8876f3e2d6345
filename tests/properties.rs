use proptest::prelude::*;

use u_cvrptw::distance::DistanceMatrix;
use u_cvrptw::error::{ExhaustionReason, SolveError};
use u_cvrptw::evaluation::AssignmentEvaluator;
use u_cvrptw::models::{Instance, InstanceData};
use u_cvrptw::search::{Solver, SolverConfig};

const HORIZON: f64 = 10_000.0;

/// Up to 12 customers on a 50 x 50 grid with windows inside the horizon.
fn instance_data() -> impl Strategy<Value = InstanceData> {
    (0usize..12).prop_flat_map(|customers| {
        let n = customers + 1;
        (
            prop::collection::vec((0i64..=50, 0i64..=50), n),
            prop::collection::vec(1i64..=40, n),
            prop::collection::vec((0i64..=2_000, 0i64..=3_000), n),
        )
            .prop_map(|(locations, demands, windows)| InstanceData {
                locations: locations.into_iter().map(|(x, y)| [x, y]).collect(),
                demands: demands
                    .into_iter()
                    .enumerate()
                    .map(|(i, d)| if i == 0 { 0 } else { d })
                    .collect(),
                start_times: windows.iter().map(|w| w.0).collect(),
                end_times: windows.iter().map(|w| w.0 + w.1).collect(),
            })
    })
}

fn solver_config() -> impl Strategy<Value = SolverConfig> {
    (1usize..6, 40i64..=120).prop_map(|(vehicles, capacity)| {
        SolverConfig::default()
            .with_num_vehicles(vehicles)
            .with_vehicle_capacity(capacity)
            .with_time_per_demand_unit(1.0)
            .with_speed(1.0)
            .with_horizon(HORIZON)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solutions_are_feasible(data in instance_data(), config in solver_config()) {
        let instance = Instance::try_from(data).expect("generated data is valid");
        let solver = Solver::new(config).expect("generated config is valid");

        match solver.solve(&instance) {
            Ok(assignment) => {
                prop_assert!(assignment.is_partition(instance.len()));
                prop_assert_eq!(assignment.num_routes(), config.num_vehicles);
                let violations = AssignmentEvaluator::new(&instance, &config).evaluate(&assignment);
                prop_assert!(violations.is_empty(), "{:?}", violations);

                for route in assignment.routes() {
                    let stops = route.stops();
                    prop_assert_eq!(stops[0].load, 0);
                    prop_assert_eq!(stops[0].time, 0.0);
                    for pair in stops.windows(2) {
                        prop_assert!(pair[1].load >= pair[0].load);
                        prop_assert!(pair[1].time >= pair[0].time);
                    }
                    prop_assert!(route.total_load() <= config.vehicle_capacity);
                    prop_assert!(route.end_time() <= HORIZON);
                }
                let sum: i64 = assignment.routes().iter().map(|r| r.total_distance()).sum();
                prop_assert_eq!(assignment.objective(), sum);
            }
            Err(err) => {
                match err {
                    SolveError::NoSolution { reason, unassigned } => {
                        prop_assert_eq!(reason, ExhaustionReason::FleetExhausted);
                        prop_assert!(unassigned > 0);
                    }
                    other => prop_assert!(false, "unexpected error {:?}", other),
                }
            }
        }
    }

    #[test]
    fn solving_is_deterministic(data in instance_data(), config in solver_config()) {
        let instance = Instance::try_from(data).expect("valid");
        let solver = Solver::new(config).expect("valid");
        prop_assert_eq!(solver.solve(&instance), solver.solve(&instance));
    }

    #[test]
    fn extra_vehicles_keep_earlier_routes(data in instance_data(), config in solver_config()) {
        let instance = Instance::try_from(data).expect("valid");
        let small = Solver::new(config).expect("valid");
        let large = Solver::new(config.with_num_vehicles(config.num_vehicles + 1)).expect("valid");

        if let Ok(assignment) = small.solve(&instance) {
            let bigger = large.solve(&instance).expect("one more vehicle cannot hurt");
            prop_assert_eq!(&bigger.routes()[..config.num_vehicles], assignment.routes());
            prop_assert!(bigger.routes()[config.num_vehicles].is_empty());
        }
    }

    #[test]
    fn distances_are_symmetric(data in instance_data()) {
        let instance = Instance::try_from(data).expect("valid");
        let matrix = DistanceMatrix::from_nodes(instance.nodes());
        prop_assert!(matrix.is_symmetric());
        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), 0);
        }
    }
}
