//! quadcomp-test - Regression test framework for quadcomp
//!
//! [`RegParams`] numbers each check in a test, records every failure
//! instead of stopping at the first, and reports them all at the end.
//!
//! # Usage
//!
//! ```ignore
//! use quadcomp_test::RegParams;
//!
//! let mut rp = RegParams::new("quadtree");
//! rp.compare_values(4.0, blocks.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! The workspace ships no binary fixtures; [`images`] builds the synthetic
//! inputs the regression tests use. Files a test writes go under
//! [`regout_dir`].

mod error;
pub mod images;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // quadcomp-test is at crates/quadcomp-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
