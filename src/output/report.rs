//! Plain-text benchmark report
//!
//! The report is line oriented so it can be piped into plotting scripts:
//!
//! ```text
//! 1 1
//! 64 0.000021 0.000049
//! 128 0.000039 0.000093
//! ```
//!
//! The first line holds the real and complex term counts. Every following
//! line holds `N`, the average of compute + solve time and the average
//! CARMA time, both in seconds.
//!
//! Each line is flushed as soon as it is written so partial results
//! survive an interrupted sweep.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use gp_scaling_bench::bench::BenchmarkResult;
//! use gp_scaling_bench::data::TermCounts;
//! use gp_scaling_bench::output::{Reporter, TextReporter};
//!
//! let mut reporter = TextReporter::new(Vec::new());
//! reporter.write_term_counts(&TermCounts::from_nterms(3)).unwrap();
//! reporter.write_result(&BenchmarkResult {
//!     size: 64,
//!     niter: 2,
//!     compute_time: Duration::from_millis(500),
//!     solve_time: Duration::from_millis(500),
//!     carma_time: Duration::from_secs(1),
//! }).unwrap();
//!
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert_eq!(text, "1 1\n64 0.5 0.5\n");
//! ```

use std::io::{self, Write};

use crate::bench::BenchmarkResult;
use crate::data::TermCounts;

// =============================================================================
// Reporter
// =============================================================================

/// Sink for benchmark output
///
/// The term-count line is written once, before any result line.
pub trait Reporter {
    /// Write the `n_real n_complex` header line
    fn write_term_counts(&mut self, counts: &TermCounts) -> io::Result<()>;

    /// Write one `N combined carma` line
    fn write_result(&mut self, result: &BenchmarkResult) -> io::Result<()>;
}

/// [`Reporter`] writing space-separated text to any [`Write`]
///
/// Times are printed in seconds with the shortest representation that
/// reads back exactly.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    writer: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn write_term_counts(&mut self, counts: &TermCounts) -> io::Result<()> {
        writeln!(self.writer, "{} {}", counts.n_real, counts.n_complex)?;
        self.writer.flush()
    }

    fn write_result(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} {} {}",
            result.size,
            result.combined_average(),
            result.carma_average()
        )?;
        self.writer.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================
