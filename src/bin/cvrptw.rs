use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use u_cvrptw::error::{InstanceError, SolveError};
use u_cvrptw::evaluation::AssignmentEvaluator;
use u_cvrptw::models::{Instance, InstanceData};
use u_cvrptw::report::SolutionReport;
use u_cvrptw::search::{SearchBudget, Solver, SolverConfig};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance file and print the routes
    Solve {
        /// JSON instance: locations, demands, start_times, end_times and an
        /// optional config object
        instance: PathBuf,

        /// Also write the per-stop CSV export to this file
        #[arg(long)]
        csv: Option<PathBuf>,

        #[arg(long)]
        vehicles: Option<usize>,

        #[arg(long)]
        capacity: Option<i64>,

        /// Wall-clock budget in milliseconds
        #[arg(long)]
        time_limit_ms: Option<u64>,

        /// Maximum number of route constructions
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Print the report as JSON instead of the console summary
        #[arg(long)]
        json: bool,
    },
    /// Write a random instance file
    #[command(visible_alias = "g")]
    Generate {
        /// Number of customers, depot excluded
        #[arg(short, long, default_value_t = 31)]
        nodes: usize,

        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct InstanceFile {
    #[serde(flatten)]
    data: InstanceData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<SolverConfig>,
}

struct Overrides {
    vehicles: Option<usize>,
    capacity: Option<i64>,
    time_limit_ms: Option<u64>,
    max_attempts: Option<u64>,
}

impl Overrides {
    fn apply(self, mut config: SolverConfig) -> SolverConfig {
        if let Some(n) = self.vehicles {
            config = config.with_num_vehicles(n);
        }
        if let Some(capacity) = self.capacity {
            config = config.with_vehicle_capacity(capacity);
        }
        let mut budget = config.budget;
        if let Some(ms) = self.time_limit_ms {
            budget = SearchBudget {
                max_attempts: budget.max_attempts,
                ..SearchBudget::new(Duration::from_millis(ms))
            };
        }
        if let Some(attempts) = self.max_attempts {
            budget = budget.with_max_attempts(attempts);
        }
        config.with_budget(budget)
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve {
            instance,
            csv,
            vehicles,
            capacity,
            time_limit_ms,
            max_attempts,
            json,
        } => {
            let overrides = Overrides {
                vehicles,
                capacity,
                time_limit_ms,
                max_attempts,
            };
            solve(&instance, csv.as_deref(), overrides, json)?
        }
        Commands::Generate {
            nodes,
            seed,
            output,
        } => generate(nodes, seed, &output)?,
    }

    Ok(())
}

fn solve(
    path: &Path,
    csv: Option<&Path>,
    overrides: Overrides,
    json: bool,
) -> Result<(), anyhow::Error> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let parsed: InstanceFile = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    let config = overrides.apply(parsed.config.unwrap_or_default());

    let instance = match Instance::try_from(parsed.data) {
        Ok(instance) => instance,
        Err(err) => {
            report_instance_error(err);
            return Ok(());
        }
    };
    info!(
        nodes = instance.len(),
        vehicles = config.num_vehicles,
        "loaded {}",
        path.display()
    );

    let solver = match Solver::new(config) {
        Ok(solver) => solver,
        Err(err) => {
            report_instance_error(err);
            return Ok(());
        }
    };
    let (result, stats) = solver.solve_with_stats(&instance);
    info!(
        attempts = stats.attempts,
        candidates = stats.build.candidates_evaluated,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "search finished"
    );

    let assignment = match result {
        Ok(assignment) => assignment,
        Err(SolveError::NoSolution { reason, unassigned }) => {
            warn!(%reason, unassigned, "search exhausted");
            println!("{}", SolveError::NoSolution { reason, unassigned });
            return Ok(());
        }
        Err(SolveError::Instance(err)) => {
            report_instance_error(err);
            return Ok(());
        }
    };

    for violation in AssignmentEvaluator::new(&instance, &config).evaluate(&assignment) {
        warn!(kind = ?violation.kind, "assignment check failed");
    }

    let report = SolutionReport::new(&assignment);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    if let Some(csv) = csv {
        let out = File::create(csv).with_context(|| format!("creating {}", csv.display()))?;
        report.write_csv(BufWriter::new(out))?;
        info!("wrote {}", csv.display());
    }

    Ok(())
}

/// Invalid input is reported on stdout and is not a process failure.
fn report_instance_error(err: InstanceError) {
    warn!(%err, "instance rejected");
    println!("{}", err);
}

fn generate(nodes: usize, seed: u64, output: &Path) -> Result<(), anyhow::Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let file = InstanceFile {
        data: InstanceData::random(nodes, &mut rng),
        config: Some(SolverConfig::default()),
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, serde_json::to_string_pretty(&file)?)?;
    info!(nodes, seed, "wrote {}", output.display());

    Ok(())
}
