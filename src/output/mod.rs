//! Output module for benchmark results
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs      ← This file
//! └── report.rs   ← Line-oriented text report
//! ```
//!
//! Results are written through the [`Reporter`] trait so the sweep can
//! stream into stdout, a file or an in-memory buffer alike.

pub mod report;

// Re-export commonly used items for convenience
pub use report::{Reporter, TextReporter};
