//! Dominant eigenvalue command-line interface.

mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use dominant_io::{DEFAULT_DATASET, JsonSource, MatrixSource};
use dominant_observers::LogObserver;
use dominant_solvers::eigen::power_iteration::{self, Config, Status};
use log::{debug, warn};

use report::Report;

#[derive(Parser)]
#[command(name = "dominant")]
#[command(about = "Estimate the dominant eigenvalue of a dense matrix by power iteration", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON document holding the matrix
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Stop once successive eigenvalue estimates differ by less than this
    #[arg(short = 'e', long, value_name = "EPS", default_value_t = 1e-6)]
    tolerance: f64,

    /// Maximum number of iterations
    #[arg(short = 'm', long, value_name = "N", default_value_t = 500, value_parser = positive)]
    max_iters: usize,

    /// JSON pointer to the matrix inside the document
    #[arg(short = 'p', long, value_name = "POINTER", default_value = DEFAULT_DATASET)]
    dataset: String,

    /// Print the matrix before solving
    #[arg(long)]
    dump: bool,

    /// Print the eigenvector estimate
    #[arg(long)]
    vector: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config =
        Config::new(cli.tolerance, cli.max_iters).context("Invalid solver configuration")?;

    let start = Instant::now();
    let source = JsonSource::open(&cli.input)
        .with_context(|| format!("Failed to open matrix file: {}", cli.input.display()))?;
    let matrix = source.load(&cli.dataset).with_context(|| {
        format!(
            "Failed to load dataset {} from {}",
            cli.dataset,
            cli.input.display()
        )
    })?;
    let read_time = start.elapsed();
    debug!("read {n}x{n} matrix in {read_time:?}", n = matrix.dim());

    if cli.dump {
        println!("{matrix}");
    }

    let start = Instant::now();
    let solution = power_iteration::solve(&matrix, &config, LogObserver::new())
        .context("Power iteration failed")?;
    let execution_time = start.elapsed();

    if solution.status == Status::MaxIters {
        warn!(
            "no convergence within {} iterations; reporting the last estimate",
            solution.iters
        );
    }

    let report = Report::new(&solution, read_time, execution_time).show_eigenvector(cli.vector);
    print!("{report}");

    Ok(())
}

/// Installs `env_logger`; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Parses a strictly positive iteration count.
fn positive(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n == 0 {
        return Err("number of iterations must be positive".to_string());
    }
    Ok(n)
}
