use u_cvrptw::error::{ExhaustionReason, InstanceError, SolveError};
use u_cvrptw::evaluation::AssignmentEvaluator;
use u_cvrptw::models::{Instance, InstanceData};
use u_cvrptw::report::SolutionReport;
use u_cvrptw::search::{SearchBudget, Solver, SolverConfig};

fn data(locations: &[[i64; 2]], demands: &[i64], windows: &[(i64, i64)]) -> InstanceData {
    InstanceData {
        locations: locations.to_vec(),
        demands: demands.to_vec(),
        start_times: windows.iter().map(|w| w.0).collect(),
        end_times: windows.iter().map(|w| w.1).collect(),
    }
}

fn sample() -> InstanceData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/sample.json");
    let text = std::fs::read_to_string(path).expect("sample instance");
    serde_json::from_str(&text).expect("valid json")
}

#[test]
fn single_customer_round_trip() {
    let instance = Instance::try_from(data(
        &[[0, 0], [3, 4]],
        &[0, 5],
        &[(0, 0), (0, 100_000)],
    ))
    .expect("valid");
    let config = SolverConfig::default().with_num_vehicles(1);
    let assignment = Solver::new(config)
        .expect("valid")
        .solve(&instance)
        .expect("solvable");

    let route = &assignment.routes()[0];
    assert_eq!(route.node_ids(), vec![0, 1, 0]);
    let loads: Vec<i64> = route.stops().iter().map(|s| s.load).collect();
    assert_eq!(loads, vec![0, 5, 5]);
    assert_eq!(assignment.objective(), 14);

    // 5 units at 300 each, plus 7 distance at speed 10
    let times: Vec<f64> = route.stops().iter().map(|s| s.time).collect();
    assert_eq!(times[0], 0.0);
    assert!((times[1] - 1500.7).abs() < 1e-9);
    assert!((times[2] - 1501.4).abs() < 1e-9);

    assert!(AssignmentEvaluator::new(&instance, &config)
        .evaluate(&assignment)
        .is_empty());
}

#[test]
fn empty_instance_is_rejected() {
    let err = Instance::try_from(data(&[], &[], &[])).unwrap_err();
    assert_eq!(err, InstanceError::Empty);
    assert_eq!(err.to_string(), "Specify an instance greater than 0.");
}

#[test]
fn demand_split_across_vehicles() {
    let instance = Instance::try_from(data(
        &[[0, 0], [3, 4], [6, 0]],
        &[0, 60, 60],
        &[(0, 0), (0, 100_000), (0, 100_000)],
    ))
    .expect("valid");

    let config = SolverConfig::default().with_num_vehicles(2);
    let assignment = Solver::new(config)
        .expect("valid")
        .solve(&instance)
        .expect("two vehicles suffice");
    // node 2 is the cheaper first arc; node 1 no longer fits after it
    assert_eq!(assignment.routes()[0].customer_ids(), vec![2]);
    assert_eq!(assignment.routes()[1].customer_ids(), vec![1]);
    assert_eq!(assignment.objective(), 12 + 14);
    for route in assignment.routes() {
        assert!(route.total_load() <= 100);
    }

    let single = Solver::new(SolverConfig::default().with_num_vehicles(1)).expect("valid");
    let err = single.solve(&instance).unwrap_err();
    assert_eq!(
        err,
        SolveError::NoSolution {
            reason: ExhaustionReason::FleetExhausted,
            unassigned: 1,
        }
    );
    assert_eq!(err.to_string(), "No solution found.");
}

#[test]
fn unreachable_window_has_no_solution() {
    // 100 distance at speed 10 plus 300 service cannot arrive by 5
    let instance = Instance::try_from(data(
        &[[0, 0], [50, 50]],
        &[0, 1],
        &[(0, 0), (0, 5)],
    ))
    .expect("valid");
    let solver = Solver::new(SolverConfig::default()).expect("valid");
    let (result, stats) = solver.solve_with_stats(&instance);
    assert!(matches!(
        result,
        Err(SolveError::NoSolution {
            reason: ExhaustionReason::FleetExhausted,
            unassigned: 1,
        })
    ));
    assert_eq!(stats.attempts, 5);
    assert!(stats.build.rejected_time > 0);
}

#[test]
fn depot_only_instance_uses_no_vehicle() {
    let instance = Instance::try_from(data(&[[10, 10]], &[0], &[(0, 0)])).expect("valid");
    let assignment = Solver::new(SolverConfig::default().with_num_vehicles(3))
        .expect("valid")
        .solve(&instance)
        .expect("nothing to serve");
    assert_eq!(assignment.objective(), 0);
    assert_eq!(assignment.num_routes(), 3);
    assert_eq!(assignment.num_used_vehicles(), 0);
}

#[test]
fn attempt_budget_stops_the_search() {
    let instance = Instance::try_from(data(
        &[[0, 0], [3, 4], [6, 0]],
        &[0, 60, 60],
        &[(0, 0), (0, 100_000), (0, 100_000)],
    ))
    .expect("valid");
    let budget = SearchBudget::default().with_max_attempts(1);
    let solver = Solver::new(SolverConfig::default().with_budget(budget)).expect("valid");
    let err = solver.solve(&instance).unwrap_err();
    assert_eq!(
        err,
        SolveError::NoSolution {
            reason: ExhaustionReason::AttemptLimit,
            unassigned: 1,
        }
    );
}

#[test]
fn sample_instance_exhausts_default_fleet() {
    let instance = Instance::try_from(sample()).expect("valid sample");
    assert_eq!(instance.len(), 32);

    let solver = Solver::new(SolverConfig::default()).expect("valid");
    let (result, stats) = solver.solve_with_stats(&instance);
    assert_eq!(
        result,
        Err(SolveError::NoSolution {
            reason: ExhaustionReason::FleetExhausted,
            unassigned: 2,
        })
    );
    assert_eq!(stats.attempts, 5);
    assert_eq!(solver.solve(&instance), result);
}

#[test]
fn sample_instance_with_larger_fleet() {
    let instance = Instance::try_from(sample()).expect("valid sample");
    let config = SolverConfig::default().with_num_vehicles(12);
    let assignment = Solver::new(config)
        .expect("valid")
        .solve(&instance)
        .expect("twelve vehicles suffice");

    assert_eq!(assignment.objective(), 1672);
    assert_eq!(assignment.num_routes(), 12);
    assert_eq!(assignment.num_used_vehicles(), 6);

    let loads: Vec<i64> = assignment
        .routes()
        .iter()
        .take(6)
        .map(|r| r.total_load())
        .collect();
    assert_eq!(loads, vec![99, 73, 100, 52, 76, 10]);

    let first = &assignment.routes()[0];
    assert_eq!(first.node_ids(), vec![0, 30, 16, 12, 1, 7, 14, 20, 0]);
    let stop_loads: Vec<i64> = first.stops().iter().map(|s| s.load).collect();
    assert_eq!(stop_loads, vec![0, 14, 32, 53, 72, 88, 91, 99, 99]);
    // waits at node 30 and node 1 for their windows to open
    assert_eq!(first.stops()[1].time, 32833.0);
    assert_eq!(first.stops()[4].time, 50891.0);
    assert!((first.end_time() - 59822.7).abs() < 1e-6);

    assert!(AssignmentEvaluator::new(&instance, &config)
        .evaluate(&assignment)
        .is_empty());
}

#[test]
fn report_lists_every_vehicle() {
    let instance = Instance::try_from(data(
        &[[0, 0], [3, 4], [6, 0]],
        &[0, 60, 60],
        &[(0, 0), (0, 100_000), (0, 100_000)],
    ))
    .expect("valid");
    let assignment = Solver::new(SolverConfig::default().with_num_vehicles(3))
        .expect("valid")
        .solve(&instance)
        .expect("solvable");
    let report = SolutionReport::new(&assignment);

    let text = report.to_string();
    assert!(text.starts_with("Total distance of all routes: 26\n"));
    assert!(text.contains("Route 2: 0 Load(0) Time(0, 0) ->  0 Load(0) Time(0, 0)\n"));

    let mut csv = Vec::new();
    report.write_csv(&mut csv).expect("write to vec");
    let csv = String::from_utf8(csv).expect("utf8");
    assert_eq!(csv.matches("Vehicle Number,").count(), 3);
    assert_eq!(csv.matches("node index,load,Time Min,Time Max").count(), 3);
    assert!(csv.contains("2,60,18000.6,18000.6\n"));
    assert!(csv.contains("1,60,18000.7,18000.7\n"));
}
