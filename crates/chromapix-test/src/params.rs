//! Regression test parameters and operations

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of the
/// current check, and every failure recorded so far. Checks never panic;
/// the test asserts on [`RegParams::cleanup`] at the end so one run reports
/// all mismatches at once.
pub struct RegParams {
    /// Name of the test (e.g., "codec")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "codec")
    pub fn new(test_name: &str) -> Self {
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

    /// Get the current check index
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
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
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

    /// Compare two RGB triples, allowing `delta` per channel
    pub fn compare_rgb(&mut self, expected: (u8, u8, u8), actual: (u8, u8, u8), delta: u8) -> bool {
        self.index += 1;
        let channels = [
            (expected.0, actual.0),
            (expected.1, actual.1),
            (expected.2, actual.2),
        ];
        let within = channels.iter().all(|&(e, a)| e.abs_diff(a) <= delta);

        if !within {
            let msg = format!(
                "Failure in {}_reg: rgb comparison for index {}\n\
                 expected = {:?}, actual = {:?}, allowed delta = {}",
                self.test_name, self.index, expected, actual, delta
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two strings for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the strings are identical, `false` otherwise.
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    ///
    /// `what` describes the condition and is reported on failure.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;

        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} failed: {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        condition
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
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

    /// Check if all checks have passed so far
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

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

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
    }

    #[test]
    fn test_compare_rgb() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_rgb((10, 20, 30), (11, 19, 30), 1));
        assert!(rp.is_success());
        assert!(!rp.compare_rgb((10, 20, 30), (12, 20, 30), 1));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_strings_and_check() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings("#FF0000", "#FF0000"));
        assert!(rp.check(true, "always"));
        assert!(rp.is_success());
        assert!(!rp.compare_strings("#FF0000", "#ff0000"));
        assert!(!rp.check(false, "never"));
        assert_eq!(rp.failures().len(), 2);
        assert!(!rp.cleanup());
    }
}
