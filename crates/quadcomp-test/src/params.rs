//! Regression test parameters and operations

use crate::regout_dir;
use quadcomp_core::{Blocks, Pix};
use std::fs;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the running
/// check index, and every failure recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "quadtree")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    ///
    /// Also creates [`regout_dir`] for tests that write scratch files.
    pub fn new(test_name: &str) -> Self {
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean condition as a check
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        condition
    }

    /// Compare two images for exact equality
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        let Some(ndiff) = pix1.count_diff_pixels(pix2) else {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            self.record_failure(msg);
            return false;
        };

        if ndiff != 0 {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - {} pixels differ",
                self.test_name, self.index, ndiff
            );
            self.record_failure(msg);
            return false;
        }
        true
    }

    /// Compare two block lists for exact equality, including order
    pub fn compare_blocks(&mut self, expected: &Blocks, actual: &Blocks) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: block comparison for index {} - count {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            self.record_failure(msg);
            return false;
        }
        if let Some((i, (e, a))) = expected
            .iter()
            .zip(actual.iter())
            .enumerate()
            .find(|(_, (e, a))| e != a)
        {
            let msg = format!(
                "Failure in {}_reg: block comparison for index {} - block {} is ({}) not ({})",
                self.test_name, self.index, i, a, e
            );
            self.record_failure(msg);
            return false;
        }
        true
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcomp_core::Block;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert_eq!(rp.index(), 1);
    }

    #[test]
    fn test_compare_blocks() {
        let mut rp = RegParams::new("test");
        let a: Blocks = vec![Block::new_unchecked(0, 0, 2, 2)].into();
        let b: Blocks = vec![Block::new_unchecked(0, 0, 2, 3)].into();
        assert!(rp.compare_blocks(&a, &a));
        assert!(!rp.compare_blocks(&a, &b));
        assert!(!rp.compare_blocks(&a, &Blocks::new()));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_pix_dimension_mismatch() {
        let mut rp = RegParams::new("test");
        let a = Pix::new(2, 2).unwrap();
        let b = Pix::new(3, 2).unwrap();
        assert!(rp.compare_pix(&a, &a));
        assert!(!rp.compare_pix(&a, &b));
    }
}
