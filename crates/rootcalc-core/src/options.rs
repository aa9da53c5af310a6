//! Calculation options and configuration.

use crate::constants::DEFAULT_LOG_VALUE_BITS;

/// Options for root calculations.
#[derive(Debug, Clone)]
pub struct Options {
    /// Answer positive inputs below 2^64 with native integer arithmetic.
    pub fast_path: bool,
    /// Check every result against the defining inequality of its operation.
    pub verify: bool,
    /// Largest value (in bits) logged in full (0 = default).
    pub log_value_bits: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fast_path: true,
            verify: false,
            log_value_bits: DEFAULT_LOG_VALUE_BITS,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.log_value_bits == 0 {
            self.log_value_bits = DEFAULT_LOG_VALUE_BITS;
        }
        self
    }
}
