//! Command-line entry point
//!
//! ```text
//! gp-scaling-bench [nterms [N_max [niter]]]
//! ```
//!
//! Writes the report to stdout and log records to stderr.

use std::error::Error;
use std::io;

use clap::Parser;

use gp_scaling_bench::bench::run_benchmark;
use gp_scaling_bench::config::CliArgs;
use gp_scaling_bench::logging;
use gp_scaling_bench::output::TextReporter;
use gp_scaling_bench::solver::{CarmaSolver, SemiseparableSolver};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_from_env()?;

    let config = CliArgs::parse().into_config();
    log::info!(
        "nterms={} N_max={} niter={} seed={}",
        config.nterms,
        config.n_max,
        config.niter,
        config.seed
    );

    let mut reporter = TextReporter::new(io::stdout().lock());
    let results =
        run_benchmark::<_, CarmaSolver, _>(&config, SemiseparableSolver::new(), &mut reporter)?;

    log::info!("sweep finished: {} problem sizes", results.len());
    Ok(())
}
