use ballquad::compare::compare_dimensions;
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Unit ball volume: grid vs. Monte Carlo", long_about = None)]
struct Args {
    /// Largest dimension to compare
    #[arg(short = 'd', long, default_value_t = 8)]
    max_dim: usize,
    /// Maximum number of points per method
    #[arg(short, long, default_value_t = 1_000_000)]
    n_max: usize,
    /// Seed for the Monte Carlo sampler
    #[arg(short, long)]
    seed: Option<u64>,
    /// Output file
    #[arg(short, long, default_value = "convergence_results.json")]
    output: String,
}

#[derive(Debug, Serialize)]
struct ReportRow {
    dim: usize,
    nx: usize,
    n_points: usize,
    cell_volume: f64,
    analytic: f64,
    grid: f64,
    grid_relative_error: f64,
    monte_carlo: f64,
    monte_carlo_relative_error: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // `cargo bench` passes `--bench` to every harness-less target.
    let args = Args::parse_from(std::env::args().filter(|arg| arg != "--bench"));

    let start = Instant::now();
    let comparisons = match compare_dimensions(1..=args.max_dim, args.n_max, args.seed) {
        Ok(comparisons) => comparisons,
        Err(err) => {
            eprintln!("Comparison failed: {err}");
            std::process::exit(1);
        }
    };
    info!(elapsed_s = start.elapsed().as_secs_f64(), "finished comparison sweep");

    let rows: Vec<ReportRow> = comparisons
        .iter()
        .map(|c| ReportRow {
            dim: c.dim,
            nx: c.nx,
            n_points: c.n_points,
            cell_volume: c.cell_volume,
            analytic: c.analytic,
            grid: c.grid,
            grid_relative_error: c.grid_relative_error(),
            monte_carlo: c.monte_carlo,
            monte_carlo_relative_error: c.monte_carlo_relative_error(),
        })
        .collect();

    for row in &rows {
        println!(
            "D={:2}  Nx={:7}  grid={:.6} ({:.2e})  mc={:.6} ({:.2e})  exact={:.6}",
            row.dim,
            row.nx,
            row.grid,
            row.grid_relative_error,
            row.monte_carlo,
            row.monte_carlo_relative_error,
            row.analytic
        );
    }

    let json = serde_json::to_string_pretty(&rows).unwrap();
    let mut file = File::create(&args.output).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    println!("Convergence results written to {}", args.output);
}
