//! Batch transformation pipeline for `.phy` world files.
//!
//! Both command-line tools share one linear skeleton:
//! parse arguments, load the world, apply exactly one transformation,
//! derive the output path, save. There is no looping, no concurrency,
//! and no state retained between invocations.
//!
//! # Invariants
//! - Every error is handled at the driver level; nothing is retried.
//! - Help and missing required flags print usage and exit 0; runtime
//!   failures print one diagnostic line and exit 1.

pub mod args;
pub mod driver;
pub mod error;
pub mod output;
pub mod transform;

pub use args::Options;
pub use driver::{Tool, run};
pub use error::PipelineError;
