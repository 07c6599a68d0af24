//! Benchmark configuration
//!
//! A [`BenchmarkConfig`] fixes everything a sweep depends on: the total
//! number of kernel terms, the largest problem size, the number of
//! repetitions per measurement, the first problem size and the random seed.
//!
//! The command line carries at most three positional integers:
//!
//! ```text
//! gp-scaling-bench [nterms [N_max [niter]]]
//! ```
//!
//! Parsing is lenient in the manner of C `atoi`: leading whitespace and an
//! optional sign are accepted, parsing stops at the first non-digit, text
//! with no leading digits reads as 0 and negative values clamp to 0. Bad
//! input therefore never aborts the run.
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use gp_scaling_bench::config::CliArgs;
//!
//! let config = CliArgs::parse_from(["gp-scaling-bench", "2", "1024"]).into_config();
//! assert_eq!(config.nterms, 2);
//! assert_eq!(config.n_max, 1024);
//! assert_eq!(config.niter, 5);
//! ```

use clap::Parser;

use crate::bench::DEFAULT_START_SIZE;
use crate::data::DEFAULT_SEED;

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "GP_BENCH_LOG";

/// Default total number of kernel terms
pub const DEFAULT_NTERMS: usize = 3;

/// Default largest problem size, 2^19
pub const DEFAULT_N_MAX: usize = 1 << 19;

/// Default repetitions per measurement
pub const DEFAULT_NITER: usize = 5;

// =================================================================================================
// BenchmarkConfig
// =================================================================================================

/// Parameters of one benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Total number of kernel terms (`n_real + 2 * n_complex`)
    pub nterms: usize,

    /// Largest problem size; also the generated dataset length
    pub n_max: usize,

    /// Repetitions per measurement
    pub niter: usize,

    /// First problem size of the doubling sequence
    pub start_size: usize,

    /// Seed of the random source, always [`DEFAULT_SEED`]
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            nterms: DEFAULT_NTERMS,
            n_max: DEFAULT_N_MAX,
            niter: DEFAULT_NITER,
            start_size: DEFAULT_START_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchmarkConfig {
    /// Builder pattern: set the term count
    pub fn with_nterms(mut self, nterms: usize) -> Self {
        self.nterms = nterms;
        self
    }

    /// Builder pattern: set the largest problem size
    pub fn with_n_max(mut self, n_max: usize) -> Self {
        self.n_max = n_max;
        self
    }

    /// Builder pattern: set the repetition count
    pub fn with_niter(mut self, niter: usize) -> Self {
        self.niter = niter;
        self
    }

    /// Builder pattern: set the first problem size
    pub fn with_start_size(mut self, start_size: usize) -> Self {
        self.start_size = start_size;
        self
    }
}

// =================================================================================================
// Command line
// =================================================================================================

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "gp-scaling-bench",
    about = "Scaling benchmark for Gaussian-process covariance solvers",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Total number of kernel terms (default 3)
    #[arg(value_parser = parse_lenient, allow_hyphen_values = true)]
    pub nterms: Option<usize>,

    /// Largest problem size (default 524288)
    #[arg(value_parser = parse_lenient, allow_hyphen_values = true)]
    pub n_max: Option<usize>,

    /// Repetitions per measurement (default 5)
    #[arg(value_parser = parse_lenient, allow_hyphen_values = true)]
    pub niter: Option<usize>,

    /// Ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl CliArgs {
    /// Resolve omitted arguments to their defaults
    pub fn into_config(self) -> BenchmarkConfig {
        if !self.extra.is_empty() {
            log::debug!("ignoring extra arguments: {:?}", self.extra);
        }

        let defaults = BenchmarkConfig::default();
        BenchmarkConfig {
            nterms: self.nterms.unwrap_or(defaults.nterms),
            n_max: self.n_max.unwrap_or(defaults.n_max),
            niter: self.niter.unwrap_or(defaults.niter),
            ..defaults
        }
    }
}

/// `atoi`-style integer parsing that never fails
///
/// ```rust
/// use gp_scaling_bench::config::parse_lenient;
///
/// assert_eq!(parse_lenient("  42abc"), Ok(42));
/// assert_eq!(parse_lenient("abc"), Ok(0));
/// assert_eq!(parse_lenient("-7"), Ok(0));
/// ```
pub fn parse_lenient(text: &str) -> Result<usize, String> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: usize = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(byte - b'0'));
    }

    if negative {
        if value != 0 {
            log::warn!("negative argument '{}' clamped to 0", text);
        }
        return Ok(0);
    }
    Ok(value)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BenchmarkConfig {
        let mut argv = vec!["gp-scaling-bench"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv).into_config()
    }

    #[test]
    fn test_defaults() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.nterms, 3);
        assert_eq!(config.n_max, 524_288);
        assert_eq!(config.niter, 5);
        assert_eq!(config.start_size, 64);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]), BenchmarkConfig::default());
    }

    #[test]
    fn test_all_arguments() {
        let config = parse(&["4", "2048", "10"]);
        assert_eq!(config.nterms, 4);
        assert_eq!(config.n_max, 2048);
        assert_eq!(config.niter, 10);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_partial_arguments() {
        let config = parse(&["1"]);
        assert_eq!(config.nterms, 1);
        assert_eq!(config.n_max, DEFAULT_N_MAX);
        assert_eq!(config.niter, DEFAULT_NITER);
    }

    #[test]
    fn test_non_numeric_reads_as_zero() {
        let config = parse(&["abc", "128", "x"]);
        assert_eq!(config.nterms, 0);
        assert_eq!(config.n_max, 128);
        assert_eq!(config.niter, 0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        let config = parse(&["3", "-64", "-1"]);
        assert_eq!(config.n_max, 0);
        assert_eq!(config.niter, 0);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let config = parse(&["3", "256", "2", "extra", "more"]);
        assert_eq!(config.nterms, 3);
        assert_eq!(config.n_max, 256);
        assert_eq!(config.niter, 2);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient("17"), Ok(17));
        assert_eq!(parse_lenient("  +8"), Ok(8));
        assert_eq!(parse_lenient("12.5"), Ok(12));
        assert_eq!(parse_lenient(""), Ok(0));
        assert_eq!(parse_lenient("-"), Ok(0));
        assert_eq!(parse_lenient("-0"), Ok(0));
        assert_eq!(parse_lenient("99999999999999999999999999"), Ok(usize::MAX));
    }

    #[test]
    fn test_builders() {
        let config = BenchmarkConfig::default()
            .with_nterms(5)
            .with_n_max(300)
            .with_niter(2)
            .with_start_size(32);
        assert_eq!(config.nterms, 5);
        assert_eq!(config.n_max, 300);
        assert_eq!(config.niter, 2);
        assert_eq!(config.start_size, 32);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_help_and_version_words_do_not_stop_a_run() {
        let config = parse(&["3", "128", "1", "--version"]);
        assert_eq!(config.nterms, 3);
        assert_eq!(config.n_max, 128);
        assert_eq!(config.niter, 1);

        let config = parse(&["3", "128", "1", "-h", "--help", "-V"]);
        assert_eq!(config.n_max, 128);

        // atoi("--help") == 0
        let config = parse(&["--help"]);
        assert_eq!(config.nterms, 0);
        assert_eq!(config.n_max, DEFAULT_N_MAX);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
